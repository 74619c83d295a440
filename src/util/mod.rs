//! Shared server utilities.

pub mod time;
