use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::map::MapRepository,
    error::Error,
    model::map::{MapDto, MapPayloadDto},
    util::time::resolve_audit_timestamps,
};

/// Service for map management.
pub struct MapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapService<'a> {
    /// Creates a new instance of MapService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, payload: MapPayloadDto) -> Result<MapDto, Error> {
        let (created_at, updated_at) = resolve_audit_timestamps(
            Utc::now().naive_utc(),
            payload.created_at,
            payload.updated_at,
        )?;

        let map = MapRepository::new(self.db)
            .create(&payload.name, created_at, updated_at)
            .await?;

        Ok(map.into())
    }

    pub async fn get(&self, id: i32) -> Result<MapDto, Error> {
        let map = MapRepository::new(self.db).get_by_id(id).await?;

        Ok(map.into())
    }

    pub async fn get_all(&self) -> Result<Vec<MapDto>, Error> {
        let maps = MapRepository::new(self.db).get_all().await?;

        Ok(maps.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, payload: MapPayloadDto) -> Result<bool, Error> {
        let (created_at, updated_at) = resolve_audit_timestamps(
            Utc::now().naive_utc(),
            payload.created_at,
            payload.updated_at,
        )?;

        let changed = MapRepository::new(self.db)
            .update(id, &payload.name, created_at, updated_at)
            .await?;

        Ok(changed)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        MapRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
