//! Data access layer repositories.
//!
//! Repositories mediate between the domain model and the SeaORM persistence
//! context. The catalog repositories ([`celestial`], [`map`]) enforce the
//! store-availability and existence discipline: mutating operations surface
//! an unreachable store and a missing entity as distinct typed failures, and
//! reserve their boolean return for "was anything actually changed."

pub mod celestial;
pub mod map;
pub mod user;
