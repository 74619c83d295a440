use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::auth::AuthError;

/// Access control role stored on the user row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Role {
    Administrator,
    Member,
}

impl Role {
    /// Parses the stored role name; unknown values are a data-integrity
    /// error, not a silent default.
    pub fn from_name(name: &str) -> Result<Self, AuthError> {
        match name {
            "Administrator" => Ok(Self::Administrator),
            "Member" => Ok(Self::Member),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Member => "Member",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl UserDto {
    pub fn from_entity(user: entity::orrery_user::Model) -> Result<Self, AuthError> {
        Ok(Self {
            id: user.id,
            role: Role::from_name(&user.role)?,
            email: user.email,
            username: user.username,
            created_at: user.created_at,
        })
    }
}
