pub mod config;
pub mod profile;
pub mod registry;
pub mod scoring;
