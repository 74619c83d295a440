//! Tests for the update_object endpoint.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use orrery::{
    controller::celestial::update_object,
    model::{auth::AuthUser, celestial::CelestialObjectPayloadDto, position::Position},
};
use orrery_test_utils::{TestBuilder, TestError};

use crate::setup::{app_state, claims_for};

fn planet_payload(map_id: i32) -> CelestialObjectPayloadDto {
    CelestialObjectPayloadDto {
        map_id,
        object_type: "Planet".to_string(),
        name: "Proxima b".to_string(),
        description: "Closest known exoplanet".to_string(),
        image: None,
        position: Some(Position::new(4, 2, -1)),
        mass: 1.07,
        temperature: 234,
        radius: 1.03,
        is_water: Some(true),
        is_life: Some(false),
        planet_type: Some("Terrestrial".to_string()),
        brightness: None,
        star_type: None,
        created_at: None,
        updated_at: None,
    }
}

/// Expect 200 OK reporting a change when replacing a stored object
#[tokio::test]
async fn success_reports_change() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_planet(0, "Proxima b")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let object_id = test.objects[0].id;
    let payload = planet_payload(test.maps[0].id);

    let result = update_object(
        State(app_state(test.db)),
        AuthUser(claims),
        Path(object_id),
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

/// Expect 404 Not Found when replacing an absent object
#[tokio::test]
async fn missing_object_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let payload = planet_payload(test.maps[0].id);

    let result = update_object(
        State(app_state(test.db)),
        AuthUser(claims),
        Path(58),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 Bad Request when the modification date precedes creation
#[tokio::test]
async fn updated_before_created_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_map("Alpha Centauri")
        .with_planet(0, "Proxima b")
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let object_id = test.objects[0].id;
    let mut payload = planet_payload(test.maps[0].id);
    payload.created_at = Some(Utc::now().naive_utc() - Duration::days(1));
    payload.updated_at = Some(Utc::now().naive_utc() - Duration::days(2));

    let result = update_object(
        State(app_state(test.db)),
        AuthUser(claims),
        Path(object_id),
        Json(payload),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
