pub mod behaviors;
pub mod lifetimes;
pub mod terrain;
