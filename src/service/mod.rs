//! Business logic services.
//!
//! Services sit between controllers and repositories: they resolve and
//! validate domain invariants (audit timestamps, subtype dispatch,
//! credential checks) and translate between DTOs and domain models.

pub mod auth;
pub mod celestial;
pub mod map;
