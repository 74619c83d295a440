pub use super::celestial_object::Entity as CelestialObject;
pub use super::map::Entity as Map;
pub use super::orrery_user::Entity as OrreryUser;
