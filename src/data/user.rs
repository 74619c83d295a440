use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::user::Role;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user; the password arrives pre-hashed.
    pub async fn create(
        &self,
        email: &str,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<entity::orrery_user::Model, DbErr> {
        let user = entity::orrery_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password.to_string()),
            role: ActiveValue::Set(role.name().to_string()),
            refresh_token: ActiveValue::Set(None),
            refresh_token_expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::orrery_user::Model>, DbErr> {
        entity::prelude::OrreryUser::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::orrery_user::Model>, DbErr> {
        entity::prelude::OrreryUser::find()
            .filter(entity::orrery_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_by_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::orrery_user::Model>, DbErr> {
        entity::prelude::OrreryUser::find()
            .filter(entity::orrery_user::Column::RefreshToken.eq(token))
            .one(self.db)
            .await
    }

    /// Stores or clears the refresh token on the user row.
    pub async fn set_refresh_token(
        &self,
        user: entity::orrery_user::Model,
        token: Option<String>,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<entity::orrery_user::Model, DbErr> {
        let mut user: entity::orrery_user::ActiveModel = user.into();

        user.refresh_token = ActiveValue::Set(token);
        user.refresh_token_expires_at = ActiveValue::Set(expires_at);
        user.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user.update(self.db).await
    }
}
