pub mod builder;
pub mod constant;
pub mod error;
pub mod fixture;
pub mod jwt;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;
