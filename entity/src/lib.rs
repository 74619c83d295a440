pub mod prelude;

pub mod celestial_object;
pub mod map;
pub mod orrery_user;
