//! Celestial object domain model and its persistence mapping.
//!
//! Planets and stars share one flattened storage row distinguished by a
//! discriminator string; the domain side is a closed sum type so every
//! encode/decode site matches exhaustively. Star-specific fields are not
//! persisted yet, so decoding a star row yields default values for them and
//! encoding drops them.

use chrono::NaiveDateTime;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::{error::celestial::CelestialError, model::position::Position};

/// Discriminator value stored for planet rows.
pub static PLANET_DISCRIMINATOR: &str = "Planet";
/// Discriminator value stored for star rows.
pub static STAR_DISCRIMINATOR: &str = "Star";

/// Categorical planet classification.
///
/// Stored as its name string; unparseable stored values decode to
/// [`PlanetType::Undefined`] rather than failing the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum PlanetType {
    Undefined,
    Terrestrial,
    GasGiant,
    IceGiant,
    Dwarf,
}

impl PlanetType {
    /// Parses a stored type name, falling back to `Undefined` on anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Terrestrial" => Self::Terrestrial,
            "GasGiant" => Self::GasGiant,
            "IceGiant" => Self::IceGiant,
            "Dwarf" => Self::Dwarf,
            _ => Self::Undefined,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Terrestrial => "Terrestrial",
            Self::GasGiant => "GasGiant",
            Self::IceGiant => "IceGiant",
            Self::Dwarf => "Dwarf",
        }
    }
}

/// Categorical star classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum StarType {
    Undefined,
    RedDwarf,
    YellowDwarf,
    WhiteDwarf,
    RedGiant,
    Supergiant,
    NeutronStar,
}

impl StarType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "RedDwarf" => Self::RedDwarf,
            "YellowDwarf" => Self::YellowDwarf,
            "WhiteDwarf" => Self::WhiteDwarf,
            "RedGiant" => Self::RedGiant,
            "Supergiant" => Self::Supergiant,
            "NeutronStar" => Self::NeutronStar,
            _ => Self::Undefined,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::RedDwarf => "RedDwarf",
            Self::YellowDwarf => "YellowDwarf",
            Self::WhiteDwarf => "WhiteDwarf",
            Self::RedGiant => "RedGiant",
            Self::Supergiant => "Supergiant",
            Self::NeutronStar => "NeutronStar",
        }
    }
}

/// Subtype-specific state of a celestial object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CelestialBody {
    Planet {
        is_water: bool,
        is_life: bool,
        planet_type: PlanetType,
    },
    /// Star fields have no storage columns yet; they survive in memory only.
    Star {
        brightness: i32,
        star_type: StarType,
    },
}

/// A celestial object owned by a map; the aggregate root of the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: i32,
    pub map_id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub position: Option<Position>,
    pub mass: f64,
    pub temperature: i32,
    pub radius: f64,
    pub body: CelestialBody,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CelestialObject {
    /// The discriminator string stored for this object's variant.
    pub fn discriminator(&self) -> &'static str {
        match self.body {
            CelestialBody::Planet { .. } => PLANET_DISCRIMINATOR,
            CelestialBody::Star { .. } => STAR_DISCRIMINATOR,
        }
    }

    /// Decodes a storage row into the domain model.
    ///
    /// Dispatches on the discriminator column: `"Planet"` rows rebuild their
    /// planet fields (unknown planet-type names become
    /// [`PlanetType::Undefined`]), `"Star"` rows rebuild the base fields only,
    /// and any other discriminator fails with
    /// [`CelestialError::UnsupportedType`].
    pub fn from_entity(entity: entity::celestial_object::Model) -> Result<Self, CelestialError> {
        let body = match entity.object_type.as_str() {
            t if t == PLANET_DISCRIMINATOR => CelestialBody::Planet {
                is_water: entity.is_water.unwrap_or(false),
                is_life: entity.is_life.unwrap_or(false),
                planet_type: entity
                    .planet_type
                    .as_deref()
                    .map(PlanetType::from_name)
                    .unwrap_or(PlanetType::Undefined),
            },
            t if t == STAR_DISCRIMINATOR => CelestialBody::Star {
                brightness: 0,
                star_type: StarType::Undefined,
            },
            other => return Err(CelestialError::UnsupportedType(other.to_string())),
        };

        // A position exists only when all three coordinates are stored
        let position = match (entity.position_x, entity.position_y, entity.position_z) {
            (Some(x), Some(y), Some(z)) => Some(Position::new(x, y, z)),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            map_id: entity.map_id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            position,
            mass: entity.mass,
            temperature: entity.temperature,
            radius: entity.radius,
            body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Decodes a collection of rows elementwise, propagating the first
    /// unsupported discriminator.
    pub fn from_entities(
        entities: Vec<entity::celestial_object::Model>,
    ) -> Result<Vec<Self>, CelestialError> {
        entities.into_iter().map(Self::from_entity).collect()
    }

    /// Encodes the domain model into an insert-ready active model.
    ///
    /// The id is left unset; [`crate::data::celestial::CelestialRepository`]
    /// fills it in for updates. Planet fields flatten into nullable columns
    /// that stay null for stars.
    pub fn to_active_model(&self) -> entity::celestial_object::ActiveModel {
        let (is_water, is_life, planet_type) = match &self.body {
            CelestialBody::Planet {
                is_water,
                is_life,
                planet_type,
            } => (
                Some(*is_water),
                Some(*is_life),
                Some(planet_type.name().to_string()),
            ),
            CelestialBody::Star { .. } => (None, None, None),
        };

        entity::celestial_object::ActiveModel {
            map_id: ActiveValue::Set(self.map_id),
            object_type: ActiveValue::Set(self.discriminator().to_string()),
            name: ActiveValue::Set(self.name.clone()),
            description: ActiveValue::Set(self.description.clone()),
            image: ActiveValue::Set(self.image.clone()),
            position_x: ActiveValue::Set(self.position.map(|p| p.x)),
            position_y: ActiveValue::Set(self.position.map(|p| p.y)),
            position_z: ActiveValue::Set(self.position.map(|p| p.z)),
            mass: ActiveValue::Set(self.mass),
            temperature: ActiveValue::Set(self.temperature),
            radius: ActiveValue::Set(self.radius),
            is_water: ActiveValue::Set(is_water),
            is_life: ActiveValue::Set(is_life),
            planet_type: ActiveValue::Set(planet_type),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
    }
}

/// API representation of a celestial object.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CelestialObjectDto {
    pub id: i32,
    pub map_id: i32,
    /// `"Planet"` or `"Star"`
    pub object_type: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub position: Option<Position>,
    pub mass: f64,
    pub temperature: i32,
    pub radius: f64,
    pub is_water: Option<bool>,
    pub is_life: Option<bool>,
    pub planet_type: Option<PlanetType>,
    pub brightness: Option<i32>,
    pub star_type: Option<StarType>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CelestialObject> for CelestialObjectDto {
    fn from(object: CelestialObject) -> Self {
        let object_type = object.discriminator().to_string();

        let (is_water, is_life, planet_type, brightness, star_type) = match object.body {
            CelestialBody::Planet {
                is_water,
                is_life,
                planet_type,
            } => (Some(is_water), Some(is_life), Some(planet_type), None, None),
            CelestialBody::Star {
                brightness,
                star_type,
            } => (None, None, None, Some(brightness), Some(star_type)),
        };

        Self {
            id: object.id,
            map_id: object.map_id,
            object_type,
            name: object.name,
            description: object.description,
            image: object.image,
            position: object.position,
            mass: object.mass,
            temperature: object.temperature,
            radius: object.radius,
            is_water,
            is_life,
            planet_type,
            brightness,
            star_type,
            created_at: object.created_at,
            updated_at: object.updated_at,
        }
    }
}

/// Request body for creating or replacing a celestial object.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CelestialObjectPayloadDto {
    pub map_id: i32,
    /// `"Planet"` or `"Star"`
    pub object_type: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub position: Option<Position>,
    pub mass: f64,
    pub temperature: i32,
    pub radius: f64,
    pub is_water: Option<bool>,
    pub is_life: Option<bool>,
    pub planet_type: Option<String>,
    pub brightness: Option<i32>,
    pub star_type: Option<String>,
    /// Defaults to the server clock when absent
    pub created_at: Option<NaiveDateTime>,
    /// Defaults to the server clock when absent
    pub updated_at: Option<NaiveDateTime>,
}
