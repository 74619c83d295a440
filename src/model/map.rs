use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::celestial::{CelestialObject, CelestialObjectDto};

/// A named map owning a collection of celestial objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    pub id: i32,
    pub name: String,
    pub objects: Vec<CelestialObject>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MapDto {
    pub id: i32,
    pub name: String,
    pub objects: Vec<CelestialObjectDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Map> for MapDto {
    fn from(map: Map) -> Self {
        Self {
            id: map.id,
            name: map.name,
            objects: map.objects.into_iter().map(Into::into).collect(),
            created_at: map.created_at,
            updated_at: map.updated_at,
        }
    }
}

/// Request body for creating or replacing a map.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MapPayloadDto {
    pub name: String,
    /// Defaults to the server clock when absent
    pub created_at: Option<NaiveDateTime>,
    /// Defaults to the server clock when absent
    pub updated_at: Option<NaiveDateTime>,
}
