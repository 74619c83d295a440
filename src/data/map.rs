use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait};

use crate::{
    error::celestial::CelestialError,
    model::{celestial::CelestialObject, map::Map},
};

/// Repository for maps and their owned celestial objects.
///
/// Follows the same availability/not-found discipline as
/// [`crate::data::celestial::CelestialRepository`]; deleting a map cascades
/// to its objects at the store level.
pub struct MapRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapRepository<'a> {
    /// Creates a new instance of [`MapRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<Map, CelestialError> {
        let map = entity::map::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(updated_at),
            ..Default::default()
        };

        let model = map.insert(self.db).await.map_err(CelestialError::from_db)?;

        Ok(Map {
            id: model.id,
            name: model.name,
            objects: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    /// Looks up a map and loads its owned objects.
    pub async fn get_by_id(&self, id: i32) -> Result<Map, CelestialError> {
        let model = entity::prelude::Map::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?
            .ok_or(CelestialError::not_found("Map", id))?;

        let objects = model
            .find_related(entity::prelude::CelestialObject)
            .all(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        Ok(Map {
            id: model.id,
            name: model.name,
            objects: CelestialObject::from_entities(objects)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Map>, CelestialError> {
        let models = entity::prelude::Map::find()
            .find_with_related(entity::prelude::CelestialObject)
            .all(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        models
            .into_iter()
            .map(|(model, objects)| {
                Ok(Map {
                    id: model.id,
                    name: model.name,
                    objects: CelestialObject::from_entities(objects)?,
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                })
            })
            .collect()
    }

    /// Existence-guarded full replacement of the map's mutable fields.
    ///
    /// # Returns
    /// - `Ok(true)` - The commit affected at least one row
    /// - `Ok(false)` - The store detected no effective change
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<bool, CelestialError> {
        let existing = entity::prelude::Map::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        if existing.is_none() {
            return Err(CelestialError::not_found("Map", id));
        }

        let active = entity::map::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(updated_at),
        };

        match active.update(self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(err) => Err(CelestialError::from_db(err)),
        }
    }

    /// Existence-checked removal; owned objects go with the map.
    pub async fn delete(&self, id: i32) -> Result<(), CelestialError> {
        let existing = entity::prelude::Map::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        if existing.is_none() {
            return Err(CelestialError::not_found("Map", id));
        }

        entity::prelude::Map::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        Ok(())
    }
}
