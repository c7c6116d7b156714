//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust structs
//! without any hand-written SQL.

use crate::entities::{
    Artifact, Artist, ArtistSong, Author, Book, Car, Character, Driver, DrivingLicense,
    HotelRoom, Location, Owner, Pet, Product, Registration, RegistryCar, Review, Song, Task,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Fallback used when `DATABASE_URL` is not set; `mode=rwc` creates the file on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/orm_drills.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or returns the
/// default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the directory holding a file-backed `SQLite` database, if missing.
fn ensure_sqlite_directory(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or(rest);
    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Opens a connection to `database_url`.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    ensure_sqlite_directory(database_url)?;
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let table = entity.table_name().to_string();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    debug!(%table, "Table ensured");
    Ok(())
}

/// Creates every table of both entity groups if it does not exist yet.
///
/// Parents are created before children so the foreign keys read naturally in the
/// generated DDL.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Pet).await?;
    create_table(db, &schema, Artifact).await?;
    create_table(db, &schema, Location).await?;
    create_table(db, &schema, Car).await?;
    create_table(db, &schema, Task).await?;
    create_table(db, &schema, HotelRoom).await?;
    create_table(db, &schema, Character).await?;

    create_table(db, &schema, Author).await?;
    create_table(db, &schema, Book).await?;
    create_table(db, &schema, Artist).await?;
    create_table(db, &schema, Song).await?;
    create_table(db, &schema, ArtistSong).await?;
    create_table(db, &schema, Product).await?;
    create_table(db, &schema, Review).await?;
    create_table(db, &schema, Driver).await?;
    create_table(db, &schema, DrivingLicense).await?;
    create_table(db, &schema, Owner).await?;
    create_table(db, &schema, RegistryCar).await?;
    create_table(db, &schema, Registration).await?;

    info!("Database tables ensured");
    Ok(())
}
