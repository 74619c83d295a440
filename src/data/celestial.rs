use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{error::celestial::CelestialError, model::celestial::CelestialObject};

/// Repository for the celestial object aggregate root.
///
/// Owns the translation between the domain model and the flattened storage
/// row; callers never see entity types.
pub struct CelestialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CelestialRepository<'a> {
    /// Creates a new instance of [`CelestialRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stages an insert for the object and commits it.
    ///
    /// # Returns
    /// - `Ok(CelestialObject)` - The committed object with its assigned id
    /// - `Err(CelestialError::DatabaseUnavailable)` - Store unreachable
    pub async fn create(&self, object: &CelestialObject) -> Result<CelestialObject, CelestialError> {
        let model = object
            .to_active_model()
            .insert(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        CelestialObject::from_entity(model)
    }

    /// Existence-guarded full replacement of the object stored under `id`.
    ///
    /// Every mutable column is overwritten from the incoming object; this is
    /// replacement, not a patch.
    ///
    /// # Returns
    /// - `Ok(true)` - The commit affected at least one row
    /// - `Ok(false)` - The store detected no effective change; not an error
    /// - `Err(CelestialError::NotFound)` - No row exists under `id`
    /// - `Err(CelestialError::DatabaseUnavailable)` - Store unreachable
    pub async fn update(
        &self,
        id: i32,
        object: &CelestialObject,
    ) -> Result<bool, CelestialError> {
        let existing = entity::prelude::CelestialObject::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        if existing.is_none() {
            return Err(CelestialError::not_found("Celestial object", id));
        }

        let mut active = object.to_active_model();
        active.id = ActiveValue::Unchanged(id);

        match active.update(self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(err) => Err(CelestialError::from_db(err)),
        }
    }

    /// Looks up an object by id, surfacing absence as a typed failure.
    pub async fn get_by_id(&self, id: i32) -> Result<CelestialObject, CelestialError> {
        let model = entity::prelude::CelestialObject::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?
            .ok_or(CelestialError::not_found("Celestial object", id))?;

        CelestialObject::from_entity(model)
    }

    pub async fn get_all(&self) -> Result<Vec<CelestialObject>, CelestialError> {
        let models = entity::prelude::CelestialObject::find()
            .order_by_asc(entity::celestial_object::Column::Id)
            .all(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        CelestialObject::from_entities(models)
    }

    pub async fn get_by_map_id(&self, map_id: i32) -> Result<Vec<CelestialObject>, CelestialError> {
        let models = entity::prelude::CelestialObject::find()
            .filter(entity::celestial_object::Column::MapId.eq(map_id))
            .order_by_asc(entity::celestial_object::Column::Id)
            .all(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        CelestialObject::from_entities(models)
    }

    /// Existence-checked removal.
    pub async fn delete(&self, id: i32) -> Result<(), CelestialError> {
        let existing = entity::prelude::CelestialObject::find_by_id(id)
            .one(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        if existing.is_none() {
            return Err(CelestialError::not_found("Celestial object", id));
        }

        entity::prelude::CelestialObject::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(CelestialError::from_db)?;

        Ok(())
    }
}
