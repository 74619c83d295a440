use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::celestial_object::Entity")]
    CelestialObject,
}

impl Related<super::celestial_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CelestialObject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
