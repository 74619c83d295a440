//! Tests for the register endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use orrery::{controller::auth::register, model::auth::RegisterDto};
use orrery_test_utils::{constant::TEST_PASSWORD_HASH, TestBuilder, TestError};

use crate::setup::app_state;

fn payload(email: &str) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        username: "ada".to_string(),
        password: TEST_PASSWORD_HASH.to_string(),
    }
}

/// Expect 201 Created when registering with a fresh email
#[tokio::test]
async fn success_creates_member_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = register(State(app_state(test.db)), Json(payload("ada@example.com"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the email is already registered
#[tokio::test]
async fn duplicate_email_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let result = register(State(app_state(test.db)), Json(payload("ada@example.com"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
