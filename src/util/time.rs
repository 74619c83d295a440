//! Time and date validation utilities.
//!
//! The audit timestamp resolver enforces the temporal invariant on
//! creation/modification dates supplied by API clients: neither date may be
//! in the future and modification may never precede creation. Callers pass
//! `now` in so tests stay deterministic.

use chrono::NaiveDateTime;

use crate::error::celestial::CelestialError;

/// Resolves optional creation/modification timestamps into a definite pair.
///
/// # Logic
/// Branches run in this order and it is observable:
/// 1. A supplied modification date later than `now` fails.
/// 2. A supplied modification date earlier than a supplied creation date fails.
/// 3. An absent modification date defaults to `now`.
/// 4. A supplied creation date later than `now` fails.
/// 5. An absent creation date resets BOTH dates to `now`, including a
///    modification date that was explicitly supplied in step 3's stead.
///
/// The step-5 override looks inconsistent but matches the established
/// contract; callers depend on a fresh record getting identical timestamps.
///
/// # Arguments
/// - `now` - Current timestamp the invariant is checked against
/// - `created_at` - Optional client-supplied creation date
/// - `updated_at` - Optional client-supplied modification date
///
/// # Returns
/// - `Ok((created_at, updated_at))` - The resolved pair
/// - `Err(CelestialError::InvalidTemporalRange)` - A supplied date violates
///   the invariant
pub fn resolve_audit_timestamps(
    now: NaiveDateTime,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
) -> Result<(NaiveDateTime, NaiveDateTime), CelestialError> {
    if let Some(updated) = updated_at {
        if updated > now {
            return Err(CelestialError::InvalidTemporalRange(
                "modification date cannot be in the future".to_string(),
            ));
        }

        if let Some(created) = created_at {
            if updated < created {
                return Err(CelestialError::InvalidTemporalRange(
                    "modification date cannot precede creation date".to_string(),
                ));
            }
        }
    }

    let mut resolved_updated = updated_at.unwrap_or(now);

    let resolved_created = match created_at {
        Some(created) => {
            if created > now {
                return Err(CelestialError::InvalidTemporalRange(
                    "creation date cannot be in the future".to_string(),
                ));
            }

            created
        }
        None => {
            // A record without a creation date is brand new; both dates
            // reset to now even when a modification date was supplied
            resolved_updated = now;
            now
        }
    };

    Ok((resolved_created, resolved_updated))
}
