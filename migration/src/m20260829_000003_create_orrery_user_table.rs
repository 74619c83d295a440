use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrreryUser::Table)
                    .if_not_exists()
                    .col(pk_auto(OrreryUser::Id))
                    .col(string_uniq(OrreryUser::Email))
                    .col(string(OrreryUser::Username))
                    .col(string(OrreryUser::Password))
                    .col(string(OrreryUser::Role))
                    .col(string_null(OrreryUser::RefreshToken))
                    .col(timestamp_null(OrreryUser::RefreshTokenExpiresAt))
                    .col(timestamp(OrreryUser::CreatedAt))
                    .col(timestamp(OrreryUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrreryUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrreryUser {
    Table,
    Id,
    Email,
    Username,
    Password,
    Role,
    RefreshToken,
    RefreshTokenExpiresAt,
    CreatedAt,
    UpdatedAt,
}
