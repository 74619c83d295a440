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
        celestial::{CelestialObjectDto, CelestialObjectPayloadDto},
    },
    service::celestial::CelestialService,
};

pub static CELESTIAL_TAG: &str = "celestial";

/// List every celestial object across all maps
#[utoipa::path(
    get,
    path = "/api/objects",
    tag = CELESTIAL_TAG,
    responses(
        (status = 200, description = "All celestial objects", body = Vec<CelestialObjectDto>),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_objects(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let objects = CelestialService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(objects)))
}

/// Get a single celestial object
#[utoipa::path(
    get,
    path = "/api/objects/{id}",
    tag = CELESTIAL_TAG,
    params(("id" = i32, Path, description = "Celestial object ID")),
    responses(
        (status = 200, description = "The requested object", body = CelestialObjectDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_object(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let object = CelestialService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(object)))
}

/// List the celestial objects owned by one map
#[utoipa::path(
    get,
    path = "/api/maps/{map_id}/objects",
    tag = CELESTIAL_TAG,
    params(("map_id" = i32, Path, description = "Map ID")),
    responses(
        (status = 200, description = "The map's objects", body = Vec<CelestialObjectDto>),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_map_objects(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(map_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let objects = CelestialService::new(&state.db).get_by_map(map_id).await?;

    Ok((StatusCode::OK, Json(objects)))
}

/// Create a celestial object in a map
#[utoipa::path(
    post,
    path = "/api/objects",
    tag = CELESTIAL_TAG,
    request_body = CelestialObjectPayloadDto,
    responses(
        (status = 201, description = "Object created", body = CelestialObjectDto),
        (status = 400, description = "Temporal invariant violated", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 500, description = "Unsupported object type", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_object(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CelestialObjectPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let object = CelestialService::new(&state.db).create(payload).await?;

    tracing::info!("Created celestial object ID {}", object.id);

    Ok((StatusCode::CREATED, Json(object)))
}

/// Replace a celestial object's fields
///
/// Full replacement semantics; returns whether the store committed an
/// effective change.
#[utoipa::path(
    put,
    path = "/api/objects/{id}",
    tag = CELESTIAL_TAG,
    params(("id" = i32, Path, description = "Celestial object ID")),
    request_body = CelestialObjectPayloadDto,
    responses(
        (status = 200, description = "Whether the object changed", body = bool),
        (status = 400, description = "Temporal invariant violated", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_object(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CelestialObjectPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let changed = CelestialService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(changed)))
}

/// Delete a celestial object
#[utoipa::path(
    delete,
    path = "/api/objects/{id}",
    tag = CELESTIAL_TAG,
    params(("id" = i32, Path, description = "Celestial object ID")),
    responses(
        (status = 204, description = "Object deleted"),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Requires the Administrator role", body = ErrorDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_object(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CelestialService::new(&state.db).delete(id).await?;

    tracing::info!("Deleted celestial object ID {}", id);

    Ok(StatusCode::NO_CONTENT)
}
