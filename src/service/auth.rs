use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        auth::{LoginDto, RefreshDto, RegisterDto, TokenClaims, TokenPairDto},
        user::{Role, UserDto},
    },
};

/// Service for account registration and token lifecycle.
///
/// Access tokens are HS256 JWTs carrying the user's id, email, and role;
/// refresh tokens are opaque random values stored on the user row and
/// rotated on every refresh. Passwords arrive pre-hashed, so credential
/// checks are plain comparisons against the stored value.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Registers a new Member account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(AuthError::EmailTaken)` - The email is already registered
    pub async fn register(&self, payload: RegisterDto) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_email(&payload.email).await?.is_some() {
            return Err(AuthError::EmailTaken(payload.email).into());
        }

        let user = user_repository
            .create(
                &payload.email,
                &payload.username,
                &payload.password,
                Role::Member,
            )
            .await?;

        Ok(UserDto::from_entity(user)?)
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// A missing account and a wrong password produce the same error so the
    /// response does not reveal which one failed.
    pub async fn login(&self, payload: LoginDto) -> Result<TokenPairDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_email(&payload.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != payload.password {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_token_pair(user).await
    }

    /// Rotates a refresh token into a fresh token pair.
    ///
    /// # Returns
    /// - `Err(AuthError::InvalidRefreshToken)` - No account holds this token
    /// - `Err(AuthError::RefreshTokenExpired)` - The token's expiry passed
    pub async fn refresh(&self, payload: RefreshDto) -> Result<TokenPairDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_refresh_token(&payload.refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        let expires_at = user
            .refresh_token_expires_at
            .ok_or(AuthError::InvalidRefreshToken)?;

        if expires_at < Utc::now().naive_utc() {
            return Err(AuthError::RefreshTokenExpired.into());
        }

        self.issue_token_pair(user).await
    }

    /// Clears the stored refresh token so it can no longer be rotated.
    pub async fn logout(&self, user_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound(user_id))?;

        user_repository.set_refresh_token(user, None, None).await?;

        Ok(())
    }

    async fn issue_token_pair(
        &self,
        user: entity::orrery_user::Model,
    ) -> Result<TokenPairDto, Error> {
        let role = Role::from_name(&user.role)?;

        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id,
            email: user.email.clone(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.access_token_minutes)).timestamp(),
        };

        let access_token = Self::encode_access_token(&self.config.jwt_secret, &claims)
            .map_err(AuthError::InvalidToken)?;

        let refresh_token = generate_refresh_token();
        let refresh_expiry =
            now.naive_utc() + Duration::days(self.config.refresh_token_days);

        UserRepository::new(self.db)
            .set_refresh_token(user, Some(refresh_token.clone()), Some(refresh_expiry))
            .await?;

        Ok(TokenPairDto {
            access_token,
            refresh_token,
        })
    }

    /// Signs an access token over the claims.
    pub fn encode_access_token(
        secret: &str,
        claims: &TokenClaims,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Validates an access token's signature and expiry and returns its
    /// claims.
    pub fn decode_access_token(secret: &str, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}

/// Generates an opaque, URL-safe refresh token.
fn generate_refresh_token() -> String {
    let mut bytes = [0u8; 48];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}
