use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::celestial::CelestialRepository,
    error::{celestial::CelestialError, Error},
    model::celestial::{
        CelestialBody, CelestialObject, CelestialObjectDto, CelestialObjectPayloadDto, PlanetType,
        StarType, PLANET_DISCRIMINATOR, STAR_DISCRIMINATOR,
    },
    util::time::resolve_audit_timestamps,
};

/// Service for the celestial object catalog.
///
/// Validates payload invariants before anything touches the store: audit
/// timestamps must satisfy the temporal invariant and the object type must
/// name a known variant.
pub struct CelestialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CelestialService<'a> {
    /// Creates a new instance of CelestialService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payload: CelestialObjectPayloadDto,
    ) -> Result<CelestialObjectDto, Error> {
        let object = object_from_payload(payload)?;

        let created = CelestialRepository::new(self.db).create(&object).await?;

        Ok(created.into())
    }

    /// Replaces the object stored under `id` with the payload.
    ///
    /// # Returns
    /// - `Ok(true)` - The store committed a change
    /// - `Ok(false)` - The store detected no effective change
    pub async fn update(
        &self,
        id: i32,
        payload: CelestialObjectPayloadDto,
    ) -> Result<bool, Error> {
        let object = object_from_payload(payload)?;

        let changed = CelestialRepository::new(self.db).update(id, &object).await?;

        Ok(changed)
    }

    pub async fn get(&self, id: i32) -> Result<CelestialObjectDto, Error> {
        let object = CelestialRepository::new(self.db).get_by_id(id).await?;

        Ok(object.into())
    }

    pub async fn get_all(&self) -> Result<Vec<CelestialObjectDto>, Error> {
        let objects = CelestialRepository::new(self.db).get_all().await?;

        Ok(objects.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_map(&self, map_id: i32) -> Result<Vec<CelestialObjectDto>, Error> {
        let objects = CelestialRepository::new(self.db).get_by_map_id(map_id).await?;

        Ok(objects.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        CelestialRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

/// Builds a validated domain object from an API payload.
///
/// The payload's object type dispatches into the body sum type; anything
/// other than the two known discriminators fails with `UnsupportedType`
/// before the store is touched.
fn object_from_payload(
    payload: CelestialObjectPayloadDto,
) -> Result<CelestialObject, CelestialError> {
    let (created_at, updated_at) = resolve_audit_timestamps(
        Utc::now().naive_utc(),
        payload.created_at,
        payload.updated_at,
    )?;

    let body = match payload.object_type.as_str() {
        t if t == PLANET_DISCRIMINATOR => CelestialBody::Planet {
            is_water: payload.is_water.unwrap_or(false),
            is_life: payload.is_life.unwrap_or(false),
            planet_type: payload
                .planet_type
                .as_deref()
                .map(PlanetType::from_name)
                .unwrap_or(PlanetType::Undefined),
        },
        t if t == STAR_DISCRIMINATOR => CelestialBody::Star {
            brightness: payload.brightness.unwrap_or(0),
            star_type: payload
                .star_type
                .as_deref()
                .map(StarType::from_name)
                .unwrap_or(StarType::Undefined),
        },
        other => return Err(CelestialError::UnsupportedType(other.to_string())),
    };

    Ok(CelestialObject {
        id: 0,
        map_id: payload.map_id,
        name: payload.name,
        description: payload.description,
        image: payload.image,
        position: payload.position,
        mass: payload.mass,
        temperature: payload.temperature,
        radius: payload.radius,
        body,
        created_at,
        updated_at,
    })
}
