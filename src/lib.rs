//! Orrery server application core modules.
//!
//! This crate implements a layered CRUD REST API for celestial objects
//! (planets and stars) organized into maps, plus JWT-based authentication
//! with role-based authorization. Requests flow through controllers into
//! services, which validate domain invariants and delegate persistence to
//! repositories backed by SeaORM.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
