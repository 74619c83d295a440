use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

/// Signs an access token over arbitrary claims with the HS256 test secret.
pub fn encode_token<T: Serialize>(secret: &str, claims: &T) -> Result<String, TestError> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
