//! Seed data loading from TOML files
//!
//! A seed file lists rows to insert into a fresh database. Every top-level array
//! is optional; missing arrays seed nothing. Dates are written as quoted
//! `"YYYY-MM-DD"` strings.
//!
//! ```toml
//! [[authors]]
//! name = "Leo Tolstoy"
//! books = [{ title = "War and Peace", price = 25.0 }]
//!
//! [[artists]]
//! name = "Indie Cafe"
//! songs = ["Lose Face"]
//! ```

use crate::entities::records::{character::CharacterClass, hotel_room::RoomType};
use crate::errors::{Error, Result};
use sea_orm::prelude::Date;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing an entire seed file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Pets to insert
    pub pets: Vec<PetSeed>,
    /// Artifacts to insert
    pub artifacts: Vec<ArtifactSeed>,
    /// Locations to insert
    pub locations: Vec<LocationSeed>,
    /// Catalogue cars to insert
    pub cars: Vec<CarSeed>,
    /// Tasks to insert
    pub tasks: Vec<TaskSeed>,
    /// Hotel rooms to insert
    pub hotel_rooms: Vec<HotelRoomSeed>,
    /// Characters to insert
    pub characters: Vec<CharacterSeed>,
    /// Authors, each with their books
    pub authors: Vec<AuthorSeed>,
    /// Songs to insert before artists link to them
    pub songs: Vec<String>,
    /// Artists, each with the titles of songs they perform
    pub artists: Vec<ArtistSeed>,
    /// Products, each with their reviews
    pub products: Vec<ProductSeed>,
    /// Drivers, each with an optional license
    pub drivers: Vec<DriverSeed>,
    /// Owner names
    pub owners: Vec<String>,
    /// Cars that can be owned and registered
    pub registry_cars: Vec<RegistryCarSeed>,
    /// Registration numbers, all initially unassigned
    pub registrations: Vec<String>,
}

/// Seed row for a pet
#[derive(Debug, Clone, Deserialize)]
pub struct PetSeed {
    /// Pet name
    pub name: String,
    /// Species
    pub species: String,
}

/// Seed row for an artifact
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSeed {
    /// Artifact name
    pub name: String,
    /// Where it was found
    pub origin: String,
    /// Age in years
    pub age: i32,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Whether it is magical
    #[serde(default)]
    pub is_magical: bool,
}

/// Seed row for a location
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSeed {
    /// Location name
    pub name: String,
    /// Region
    pub region: String,
    /// Population
    pub population: i32,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Whether it is a capital
    #[serde(default)]
    pub is_capital: bool,
}

/// Seed row for a catalogue car
#[derive(Debug, Clone, Deserialize)]
pub struct CarSeed {
    /// Model name
    pub model: String,
    /// Production year
    pub year: i32,
    /// Colour
    pub color: String,
    /// List price
    pub price: f64,
}

/// Seed row for a task
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSeed {
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Due date
    pub due_date: Date,
    /// Whether it is done
    #[serde(default)]
    pub is_finished: bool,
}

/// Seed row for a hotel room
#[derive(Debug, Clone, Deserialize)]
pub struct HotelRoomSeed {
    /// Number on the door
    pub room_number: i32,
    /// Standard, Deluxe or Suite
    pub room_type: RoomType,
    /// Guests the room holds
    pub capacity: i32,
    /// Amenities
    #[serde(default)]
    pub amenities: String,
    /// Nightly rate
    pub price_per_night: f64,
    /// Whether it is booked
    #[serde(default)]
    pub is_reserved: bool,
}

/// Seed row for a character
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSeed {
    /// Name
    pub name: String,
    /// Class
    pub class_name: CharacterClass,
    /// Level
    pub level: i32,
    /// Strength
    pub strength: i32,
    /// Dexterity
    pub dexterity: i32,
    /// Intelligence
    pub intelligence: i32,
    /// Hit points
    pub hit_points: i32,
    /// Inventory
    #[serde(default)]
    pub inventory: String,
}

/// Seed row for an author and their books
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorSeed {
    /// Author name
    pub name: String,
    /// Books written by the author
    #[serde(default)]
    pub books: Vec<BookSeed>,
}

/// Seed row for a book
#[derive(Debug, Clone, Deserialize)]
pub struct BookSeed {
    /// Title
    pub title: String,
    /// Price
    pub price: f64,
}

/// Seed row for an artist and the songs they perform
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSeed {
    /// Artist name
    pub name: String,
    /// Titles of songs; each must appear in `songs`
    #[serde(default)]
    pub songs: Vec<String>,
}

/// Seed row for a product and its reviews
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSeed {
    /// Product name
    pub name: String,
    /// Reviews of the product
    #[serde(default)]
    pub reviews: Vec<ReviewSeed>,
}

/// Seed row for a review
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSeed {
    /// Review text
    pub description: String,
    /// Rating
    pub rating: i32,
}

/// Seed row for a driver
#[derive(Debug, Clone, Deserialize)]
pub struct DriverSeed {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// License, if the driver holds one
    pub license: Option<LicenseSeed>,
}

/// Seed row for a driving license
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseSeed {
    /// License number
    pub license_number: String,
    /// Issue date
    pub issue_date: Date,
}

/// Seed row for a registry car
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryCarSeed {
    /// Model name
    pub model: String,
    /// Production year
    pub year: i32,
}

/// Parses seed data from TOML text.
pub fn parse_seed(contents: &str) -> Result<SeedData> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed data from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed(&contents)
}
