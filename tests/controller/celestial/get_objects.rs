//! Tests for the get_objects and get_map_objects endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use orrery::{
    controller::celestial::{get_map_objects, get_objects},
    model::{auth::AuthUser, celestial::CelestialObjectDto},
};
use orrery_test_utils::{TestBuilder, TestError};

use crate::setup::{app_state, claims_for};

/// Expect 200 OK with every stored object across maps
#[tokio::test]
async fn success_lists_all_objects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_map("Sol")
        .with_planet(0, "Proxima b")
        .with_planet(1, "Mars")
        .with_star(1, "Sol")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);

    let result = get_objects(State(app_state(test.db)), AuthUser(claims)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let objects: Vec<CelestialObjectDto> = serde_json::from_slice(&body).unwrap();

    assert_eq!(objects.len(), 3);

    Ok(())
}

/// Expect 200 OK with an empty list when no objects exist
#[tokio::test]
async fn success_with_no_objects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);

    let result = get_objects(State(app_state(test.db)), AuthUser(claims)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let objects: Vec<CelestialObjectDto> = serde_json::from_slice(&body).unwrap();

    assert!(objects.is_empty());

    Ok(())
}

/// Expect 200 OK with only the requested map's objects
#[tokio::test]
async fn success_scopes_to_map() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_map("Sol")
        .with_planet(0, "Proxima b")
        .with_planet(1, "Mars")
        .with_star(1, "Sol")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let map_id = test.maps[1].id;

    let result = get_map_objects(State(app_state(test.db)), AuthUser(claims), Path(map_id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let objects: Vec<CelestialObjectDto> = serde_json::from_slice(&body).unwrap();

    assert_eq!(objects.len(), 2);
    assert!(objects.iter().all(|object| object.map_id == map_id));

    Ok(())
}
