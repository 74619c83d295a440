//! Tests for the update_map endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use orrery::{
    controller::map::update_map,
    model::{auth::AuthUser, map::MapPayloadDto},
};
use orrery_test_utils::{TestBuilder, TestError};

use crate::setup::{app_state, claims_for};

/// Expect 200 OK reporting a change for an existing map
#[tokio::test]
async fn success_reports_change() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let map_id = test.maps[0].id;
    let payload = MapPayloadDto {
        name: "Alpha Centauri AB".to_string(),
        created_at: None,
        updated_at: None,
    };

    let result = update_map(
        State(app_state(test.db)),
        AuthUser(claims),
        Path(map_id),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let changed: bool = serde_json::from_slice(&body).unwrap();
    assert!(changed);

    Ok(())
}

/// Expect 404 Not Found when replacing an absent map
#[tokio::test]
async fn missing_map_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let payload = MapPayloadDto {
        name: "Alpha Centauri".to_string(),
        created_at: None,
        updated_at: None,
    };

    let result = update_map(
        State(app_state(test.db)),
        AuthUser(claims),
        Path(77),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
