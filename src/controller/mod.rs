//! HTTP request handlers.

pub mod auth;
pub mod celestial;
pub mod map;
