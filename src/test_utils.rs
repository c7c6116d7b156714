//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::records::{character, hotel_room, location, task},
    entities::records::{self as record_entities, character::CharacterClass, hotel_room::RoomType},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, prelude::Date};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts an artifact and returns the stored model.
///
/// # Defaults
/// * `origin`: `"Test origin"`
/// * `description`: `"Test artifact"`
pub async fn create_test_artifact(
    db: &DatabaseConnection,
    name: &str,
    age: i32,
    is_magical: bool,
) -> Result<record_entities::artifact::Model> {
    record_entities::artifact::ActiveModel {
        name: Set(name.to_string()),
        origin: Set("Test origin".to_string()),
        age: Set(age),
        description: Set("Test artifact".to_string()),
        is_magical: Set(is_magical),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a non-capital test location.
pub async fn create_test_location(
    db: &DatabaseConnection,
    name: &str,
    population: i32,
) -> Result<record_entities::location::Model> {
    location::create_location(db, name, "Test region", population, "Test location", false).await
}

/// Creates a test task due on 2024-03-01.
///
/// # Defaults
/// * `description`: `"Test task"`
pub async fn create_test_task(
    db: &DatabaseConnection,
    title: &str,
    is_finished: bool,
) -> Result<record_entities::task::Model> {
    let due_date = Date::from_ymd_opt(2024, 3, 1).ok_or_else(|| {
        crate::errors::Error::validation("invalid test due date")
    })?;
    task::create_task(db, title, "Test task", due_date, is_finished).await
}

/// Creates a test room priced at 100 per night.
pub async fn create_test_room(
    db: &DatabaseConnection,
    room_number: i32,
    room_type: RoomType,
    capacity: i32,
    is_reserved: bool,
) -> Result<record_entities::hotel_room::Model> {
    hotel_room::create_hotel_room(
        db,
        room_number,
        room_type,
        capacity,
        "TV",
        100.0,
        is_reserved,
    )
    .await
}

/// Creates a test character.
///
/// # Defaults
/// * level 10, strength 20, dexterity 30, intelligence 40, hit points 100
/// * `inventory`: `"Potion"`
pub async fn create_test_character(
    db: &DatabaseConnection,
    name: &str,
    class_name: CharacterClass,
) -> Result<record_entities::character::Model> {
    character::create_character(
        db,
        character::NewCharacter {
            name: name.to_string(),
            class_name,
            level: 10,
            strength: 20,
            dexterity: 30,
            intelligence: 40,
            hit_points: 100,
            inventory: "Potion".to_string(),
        },
    )
    .await
}
