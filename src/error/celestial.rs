use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

/// Errors raised by the celestial catalog domain: repositories, the
/// entity-model mapping layer, and the date invariant checker.
#[derive(Error, Debug)]
pub enum CelestialError {
    /// The backing store is unreachable; surfaced immediately, never retried.
    #[error("Database is unavailable: {0}")]
    DatabaseUnavailable(DbErr),
    /// The requested entity does not exist.
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// Creation/modification timestamps violate the temporal invariant.
    #[error("Invalid temporal range: {0}")]
    InvalidTemporalRange(String),
    /// A stored row carries a discriminator no domain variant maps to.
    #[error("Unsupported celestial object type: {0:?}")]
    UnsupportedType(String),
    /// Any other database failure (query, execution, constraint violation).
    #[error(transparent)]
    Database(DbErr),
}

impl CelestialError {
    /// Classifies a SeaORM error: connection-class failures become
    /// [`CelestialError::DatabaseUnavailable`], everything else passes
    /// through as [`CelestialError::Database`].
    pub fn from_db(err: DbErr) -> Self {
        match err {
            err @ (DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
                Self::DatabaseUnavailable(err)
            }
            err => Self::Database(err),
        }
    }

    /// Shorthand for a typed not-found failure.
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl IntoResponse for CelestialError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidTemporalRange(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::DatabaseUnavailable(err) => {
                tracing::error!("Database unavailable: {}", err);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Database is unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
