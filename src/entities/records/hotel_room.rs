//! Hotel room entity - a bookable room with a type, capacity and nightly rate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of room; stored as its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RoomType {
    /// Standard room
    #[sea_orm(string_value = "Standard")]
    Standard,
    /// Deluxe room
    #[sea_orm(string_value = "Deluxe")]
    Deluxe,
    /// Suite
    #[sea_orm(string_value = "Suite")]
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

/// Hotel room database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel_rooms")]
pub struct Model {
    /// Unique identifier for the room
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Number on the door
    pub room_number: i32,
    /// Standard, Deluxe or Suite
    pub room_type: RoomType,
    /// Number of guests the room holds
    pub capacity: i32,
    /// Free-form list of amenities
    #[sea_orm(column_type = "Text")]
    pub amenities: String,
    /// Nightly rate
    pub price_per_night: f64,
    /// Whether the room is currently booked
    pub is_reserved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} room with number {} costs {:.2}$ per night!",
            self.room_type, self.room_number, self.price_per_night
        )
    }
}
