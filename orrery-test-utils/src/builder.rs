//! Declarative test builder.
//!
//! Configuration methods queue fixtures which are inserted during the final
//! `build()` call, so tests read as one chained declaration.

use sea_orm::DatabaseConnection;

use crate::{
    error::TestError,
    fixture::{insert_map, insert_planet_row, insert_star_row, insert_user},
    setup::{catalog_tables, TestSetup},
};

pub struct TestBuilder {
    include_catalog_tables: bool,
    maps: Vec<String>,
    planets: Vec<(usize, String)>, // (map index, name)
    stars: Vec<(usize, String)>,
    users: Vec<(String, String)>, // (email, role)
}

/// Everything `build()` produced: the database handle plus the inserted
/// fixture rows in declaration order.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub maps: Vec<entity::map::Model>,
    pub objects: Vec<entity::celestial_object::Model>,
    pub users: Vec<entity::orrery_user::Model>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_catalog_tables: false,
            maps: Vec::new(),
            planets: Vec::new(),
            stars: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create the map, celestial object, and user tables.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    pub fn with_map(mut self, name: &str) -> Self {
        self.maps.push(name.to_string());
        self
    }

    /// Insert a planet row into the map declared at `map_index`.
    pub fn with_planet(mut self, map_index: usize, name: &str) -> Self {
        self.planets.push((map_index, name.to_string()));
        self
    }

    /// Insert a star row into the map declared at `map_index`.
    pub fn with_star(mut self, map_index: usize, name: &str) -> Self {
        self.stars.push((map_index, name.to_string()));
        self
    }

    pub fn with_member_user(mut self, email: &str) -> Self {
        self.users.push((email.to_string(), "Member".to_string()));
        self
    }

    pub fn with_admin_user(mut self, email: &str) -> Self {
        self.users
            .push((email.to_string(), "Administrator".to_string()));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestSetup::new().await?;

        if self.include_catalog_tables {
            setup.with_tables(catalog_tables()).await?;
        }

        let mut maps = Vec::new();
        for name in &self.maps {
            maps.push(insert_map(&setup.db, name).await?);
        }

        let mut objects = Vec::new();
        for (map_index, name) in &self.planets {
            objects.push(insert_planet_row(&setup.db, maps[*map_index].id, name).await?);
        }
        for (map_index, name) in &self.stars {
            objects.push(insert_star_row(&setup.db, maps[*map_index].id, name).await?);
        }

        let mut users = Vec::new();
        for (email, role) in &self.users {
            users.push(insert_user(&setup.db, email, role).await?);
        }

        Ok(TestContext {
            db: setup.db,
            maps,
            objects,
            users,
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
