//! Refresh token lifecycle tests against the auth service.

use axum::{http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use orrery::{
    model::auth::{LoginDto, RefreshDto},
    service::auth::AuthService,
};
use orrery_test_utils::{constant::TEST_PASSWORD_HASH, TestBuilder, TestError};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::setup::test_config;

/// Login stores the issued refresh token on the user row
#[tokio::test]
async fn login_persists_refresh_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let config = test_config();
    let service = AuthService::new(&test.db, &config);

    let pair = service
        .login(LoginDto {
            email: "ada@example.com".to_string(),
            password: TEST_PASSWORD_HASH.to_string(),
        })
        .await
        .unwrap();

    let user = entity::prelude::OrreryUser::find_by_id(test.users[0].id)
        .one(&test.db)
        .await?
        .unwrap();

    assert_eq!(user.refresh_token.as_deref(), Some(pair.refresh_token.as_str()));
    assert!(user.refresh_token_expires_at.is_some());

    Ok(())
}

/// Refresh rotates the stored token so the old one stops working
#[tokio::test]
async fn refresh_rotates_stored_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let config = test_config();
    let service = AuthService::new(&test.db, &config);

    let first = service
        .login(LoginDto {
            email: "ada@example.com".to_string(),
            password: TEST_PASSWORD_HASH.to_string(),
        })
        .await
        .unwrap();

    let second = service
        .refresh(RefreshDto {
            refresh_token: first.refresh_token.clone(),
        })
        .await
        .unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);

    let replay = service
        .refresh(RefreshDto {
            refresh_token: first.refresh_token,
        })
        .await;

    assert!(replay.is_err());
    let resp = replay.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// A token no account holds is rejected as unauthorized
#[tokio::test]
async fn unknown_refresh_token_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let config = test_config();
    let service = AuthService::new(&test.db, &config);

    let result = service
        .refresh(RefreshDto {
            refresh_token: "never-issued".to_string(),
        })
        .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// A token past its stored expiry is rejected as unauthorized
#[tokio::test]
async fn expired_refresh_token_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_member_user("ada@example.com")
        .build()
        .await?;

    let mut user: entity::orrery_user::ActiveModel = test.users[0].clone().into();
    user.refresh_token = ActiveValue::Set(Some("stale-token".to_string()));
    user.refresh_token_expires_at =
        ActiveValue::Set(Some(Utc::now().naive_utc() - Duration::days(1)));
    user.update(&test.db).await?;

    let config = test_config();
    let service = AuthService::new(&test.db, &config);

    let result = service
        .refresh(RefreshDto {
            refresh_token: "stale-token".to_string(),
        })
        .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
