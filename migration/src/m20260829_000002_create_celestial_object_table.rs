use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_create_map_table::Map;

static FK_CELESTIAL_OBJECT_MAP_ID: &str = "fk_celestial_object_map_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CelestialObject::Table)
                    .if_not_exists()
                    .col(pk_auto(CelestialObject::Id))
                    .col(integer(CelestialObject::MapId))
                    .col(string(CelestialObject::ObjectType))
                    .col(string(CelestialObject::Name))
                    .col(string(CelestialObject::Description))
                    .col(string_null(CelestialObject::Image))
                    .col(integer_null(CelestialObject::PositionX))
                    .col(integer_null(CelestialObject::PositionY))
                    .col(integer_null(CelestialObject::PositionZ))
                    .col(double(CelestialObject::Mass))
                    .col(integer(CelestialObject::Temperature))
                    .col(double(CelestialObject::Radius))
                    .col(boolean_null(CelestialObject::IsWater))
                    .col(boolean_null(CelestialObject::IsLife))
                    .col(string_null(CelestialObject::PlanetType))
                    .col(timestamp(CelestialObject::CreatedAt))
                    .col(timestamp(CelestialObject::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CELESTIAL_OBJECT_MAP_ID)
                    .from_tbl(CelestialObject::Table)
                    .from_col(CelestialObject::MapId)
                    .to_tbl(Map::Table)
                    .to_col(Map::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CELESTIAL_OBJECT_MAP_ID)
                    .table(CelestialObject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CelestialObject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CelestialObject {
    Table,
    Id,
    MapId,
    ObjectType,
    Name,
    Description,
    Image,
    PositionX,
    PositionY,
    PositionZ,
    Mass,
    Temperature,
    Radius,
    IsWater,
    IsLife,
    PlanetType,
    CreatedAt,
    UpdatedAt,
}
