//! Authentication DTOs, JWT claims, and request extractors.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{auth::AuthError, Error},
    model::{app::AppState, user::Role},
    service::auth::AuthService,
};

/// Claims embedded in access tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the user ID.
    pub sub: i32,
    pub email: String,
    pub role: Role,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub username: String,
    /// Pre-hashed by the caller; the server never hashes passwords.
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    /// Pre-hashed by the caller.
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefreshDto {
    pub refresh_token: String,
}

/// Access/refresh token pair returned by login and refresh.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// Extractor for any authenticated user.
///
/// Validates the `Authorization: Bearer` token and exposes its claims.
pub struct AuthUser(pub TokenClaims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = AuthService::decode_access_token(&state.config.jwt_secret, token)?;

        Ok(AuthUser(claims))
    }
}

/// Extractor for Administrator-only endpoints.
pub struct AdminUser(pub TokenClaims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if claims.role != Role::Administrator {
            return Err(AuthError::Forbidden.into());
        }

        Ok(AdminUser(claims))
    }
}
