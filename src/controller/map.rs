use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::{AdminUser, AuthUser},
        map::{MapDto, MapPayloadDto},
    },
    service::map::MapService,
};

pub static MAP_TAG: &str = "map";

/// List all maps with their celestial objects
#[utoipa::path(
    get,
    path = "/api/maps",
    tag = MAP_TAG,
    responses(
        (status = 200, description = "All maps", body = Vec<MapDto>),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_maps(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let maps = MapService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(maps)))
}

/// Get a single map with its celestial objects
#[utoipa::path(
    get,
    path = "/api/maps/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    responses(
        (status = 200, description = "The requested map", body = MapDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_map(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let map = MapService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(map)))
}

/// Create a new map
#[utoipa::path(
    post,
    path = "/api/maps",
    tag = MAP_TAG,
    request_body = MapPayloadDto,
    responses(
        (status = 201, description = "Map created", body = MapDto),
        (status = 400, description = "Temporal invariant violated", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_map(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<MapPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let map = MapService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(map)))
}

/// Replace a map's fields
///
/// Returns whether the store committed an effective change.
#[utoipa::path(
    put,
    path = "/api/maps/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    request_body = MapPayloadDto,
    responses(
        (status = 200, description = "Whether the map changed", body = bool),
        (status = 400, description = "Temporal invariant violated", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_map(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<MapPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let changed = MapService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(changed)))
}

/// Delete a map and everything it owns
#[utoipa::path(
    delete,
    path = "/api/maps/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    responses(
        (status = 204, description = "Map deleted"),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Requires the Administrator role", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_map(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    MapService::new(&state.db).delete(id).await?;

    tracing::info!("Deleted map ID {}", id);

    Ok(StatusCode::NO_CONTENT)
}
