use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema,
};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database with no tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Create-table statements for the full catalog schema (maps, celestial
/// objects, users), derived from the entity definitions.
pub fn catalog_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Map),
        schema.create_table_from_entity(entity::prelude::CelestialObject),
        schema.create_table_from_entity(entity::prelude::OrreryUser),
    ]
}

/// Shorthand for an in-memory database with the full catalog schema.
pub async fn test_db() -> Result<DatabaseConnection, TestError> {
    let setup = TestSetup::new().await?;
    setup.with_tables(catalog_tables()).await?;

    Ok(setup.db)
}
