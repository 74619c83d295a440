//! Tests for the bearer-token request extractors.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, Request, StatusCode},
    response::IntoResponse,
};
use orrery::model::auth::{AdminUser, AuthUser};
use orrery_test_utils::{constant::TEST_JWT_SECRET, jwt::encode_token, TestBuilder, TestError};

use crate::setup::{app_state, claims_for};

fn parts_with_header(value: Option<&str>) -> axum::http::request::Parts {
    let builder = Request::builder();
    let builder = match value {
        Some(value) => builder.header(AUTHORIZATION, value),
        None => builder,
    };

    builder.body(()).unwrap().into_parts().0
}

/// Expect a valid bearer token to yield its claims
#[tokio::test]
async fn auth_user_accepts_valid_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let token = encode_token(TEST_JWT_SECRET, &claims)?;
    let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_ok());
    let AuthUser(extracted) = result.unwrap();
    assert_eq!(extracted.sub, claims.sub);
    assert_eq!(extracted.email, "ada@example.com");

    Ok(())
}

/// Expect 401 when the authorization header is absent
#[tokio::test]
async fn auth_user_rejects_missing_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let mut parts = parts_with_header(None);

    let result = AuthUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a header without the bearer scheme
#[tokio::test]
async fn auth_user_rejects_malformed_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let mut parts = parts_with_header(Some("Basic YWRhOnNlY3JldA=="));

    let result = AuthUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a token signed under a different secret
#[tokio::test]
async fn auth_user_rejects_foreign_signature() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let token = encode_token("other-secret", &claims)?;
    let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect an administrator token to pass the admin extractor
#[tokio::test]
async fn admin_user_accepts_administrator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_admin_user("root@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let token = encode_token(TEST_JWT_SECRET, &claims)?;
    let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

    let result = AdminUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect 403 when a member token reaches an admin-only extractor
#[tokio::test]
async fn admin_user_rejects_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let claims = claims_for(&test.users[0]);
    let token = encode_token(TEST_JWT_SECRET, &claims)?;
    let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

    let result = AdminUser::from_request_parts(&mut parts, &app_state(test.db)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
