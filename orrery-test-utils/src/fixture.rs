//! Database row fixtures shared across test suites.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError};

pub async fn insert_map(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::map::Model, TestError> {
    let now = Utc::now().naive_utc();

    let map = entity::map::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(map.insert(db).await?)
}

pub async fn insert_planet_row(
    db: &DatabaseConnection,
    map_id: i32,
    name: &str,
) -> Result<entity::celestial_object::Model, TestError> {
    let now = Utc::now().naive_utc();

    let planet = entity::celestial_object::ActiveModel {
        map_id: ActiveValue::Set(map_id),
        object_type: ActiveValue::Set("Planet".to_string()),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set("Fixture planet".to_string()),
        image: ActiveValue::Set(None),
        position_x: ActiveValue::Set(Some(1)),
        position_y: ActiveValue::Set(Some(2)),
        position_z: ActiveValue::Set(Some(3)),
        mass: ActiveValue::Set(1.0),
        temperature: ActiveValue::Set(288),
        radius: ActiveValue::Set(1.0),
        is_water: ActiveValue::Set(Some(true)),
        is_life: ActiveValue::Set(Some(true)),
        planet_type: ActiveValue::Set(Some("Terrestrial".to_string())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(planet.insert(db).await?)
}

pub async fn insert_star_row(
    db: &DatabaseConnection,
    map_id: i32,
    name: &str,
) -> Result<entity::celestial_object::Model, TestError> {
    let now = Utc::now().naive_utc();

    let star = entity::celestial_object::ActiveModel {
        map_id: ActiveValue::Set(map_id),
        object_type: ActiveValue::Set("Star".to_string()),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set("Fixture star".to_string()),
        image: ActiveValue::Set(None),
        position_x: ActiveValue::Set(None),
        position_y: ActiveValue::Set(None),
        position_z: ActiveValue::Set(None),
        mass: ActiveValue::Set(1.0),
        temperature: ActiveValue::Set(5778),
        radius: ActiveValue::Set(1.0),
        is_water: ActiveValue::Set(None),
        is_life: ActiveValue::Set(None),
        planet_type: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(star.insert(db).await?)
}

pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
    role: &str,
) -> Result<entity::orrery_user::Model, TestError> {
    let now = Utc::now().naive_utc();

    let user = entity::orrery_user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        username: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
        password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
        role: ActiveValue::Set(role.to_string()),
        refresh_token: ActiveValue::Set(None),
        refresh_token_expires_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
