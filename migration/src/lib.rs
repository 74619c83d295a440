pub use sea_orm_migration::prelude::*;

mod m20260829_000001_create_map_table;
mod m20260829_000002_create_celestial_object_table;
mod m20260829_000003_create_orrery_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_map_table::Migration),
            Box::new(m20260829_000002_create_celestial_object_table::Migration),
            Box::new(m20260829_000003_create_orrery_user_table::Migration),
        ]
    }
}
