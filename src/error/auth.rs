use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or malformed")]
    MissingToken,
    #[error("Access token is invalid or expired")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    #[error("Refresh token does not match the one on record")]
    InvalidRefreshToken,
    #[error("Refresh token has expired")]
    RefreshTokenExpired,
    #[error("User ID {0} not found in database despite carrying a valid token")]
    UserNotFound(i32),
    #[error("Operation requires the Administrator role")]
    Forbidden,
    #[error("Unrecognized role {0:?} stored for user")]
    UnknownRole(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::InvalidCredentials
            | Self::InvalidRefreshToken
            | Self::RefreshTokenExpired => StatusCode::UNAUTHORIZED,
            Self::EmailTaken(_) => StatusCode::CONFLICT,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UnknownRole(_) => return InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
