use sea_orm::entity::prelude::*;

/// Flattened storage row for both planets and stars.
///
/// `object_type` is the discriminator (`"Planet"` or `"Star"`); the
/// planet-only columns are null for star rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "celestial_object")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub map_id: i32,
    pub object_type: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
    pub position_z: Option<i32>,
    pub mass: f64,
    pub temperature: i32,
    pub radius: f64,
    pub is_water: Option<bool>,
    pub is_life: Option<bool>,
    pub planet_type: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::map::Entity",
        from = "Column::MapId",
        to = "super::map::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Map,
}

impl Related<super::map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Map.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
