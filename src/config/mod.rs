/// Database configuration and connection management
pub mod database;

/// Seed data loading from TOML files
pub mod seed;
