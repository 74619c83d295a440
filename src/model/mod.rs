//! Domain models and API DTOs.

pub mod api;
pub mod app;
pub mod auth;
pub mod celestial;
pub mod map;
pub mod position;
pub mod user;
