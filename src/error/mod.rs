//! Error types for the Orrery server application.
//!
//! This module provides specialized error types for the application's domains
//! (celestial catalog, authentication, configuration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions.

pub mod auth;
pub mod celestial;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, celestial::CelestialError, config::ConfigError},
    model::api::ErrorDto,
};

/// Main error type for the Orrery server application.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type, using `thiserror`'s `#[from]` attribute
/// so the `?` operator converts automatically. The `IntoResponse`
/// implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (token validation, credentials, role checks).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Celestial catalog error (store availability, missing entities,
    /// temporal invariants, mapping failures).
    #[error(transparent)]
    CelestialError(#[from] CelestialError),
    /// Database error surfaced outside the repository layer.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CelestialError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
