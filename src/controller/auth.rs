use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::{AuthUser, LoginDto, RefreshDto, RegisterDto, TokenPairDto},
        user::UserDto,
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new member account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.config)
        .register(payload)
        .await?;

    tracing::info!("Registered new user ID {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = TokenPairDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let tokens = AuthService::new(&state.db, &state.config)
        .login(payload)
        .await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Rotate a refresh token into a fresh token pair
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Tokens rotated", body = TokenPairDto),
        (status = 401, description = "Refresh token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, Error> {
    let tokens = AuthService::new(&state.db, &state.config)
        .refresh(payload)
        .await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Invalidate the current user's refresh token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db, &state.config)
        .logout(claims.sub)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
