pub mod config;
pub mod elements;
