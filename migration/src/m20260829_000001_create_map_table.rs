use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Map::Table)
                    .if_not_exists()
                    .col(pk_auto(Map::Id))
                    .col(string(Map::Name))
                    .col(timestamp(Map::CreatedAt))
                    .col(timestamp(Map::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Map::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Map {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
