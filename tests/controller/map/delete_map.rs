//! Tests for the delete_map endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use orrery::{controller::map::delete_map, model::auth::AdminUser};
use orrery_test_utils::{TestBuilder, TestError};
use sea_orm::EntityTrait;

use crate::setup::{app_state, claims_for};

/// Expect 204 and the map's objects gone with it
#[tokio::test]
async fn success_removes_map_and_objects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_planet(0, "Proxima b")
        .with_admin_user("root@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let map_id = test.maps[0].id;

    let result = delete_map(
        State(app_state(test.db.clone())),
        AdminUser(claims),
        Path(map_id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::CelestialObject::find().all(&test.db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect 404 Not Found when deleting an absent map
#[tokio::test]
async fn missing_map_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_admin_user("root@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);

    let result = delete_map(State(app_state(test.db)), AdminUser(claims), Path(12)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
