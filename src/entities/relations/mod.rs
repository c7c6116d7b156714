//! Related entities: one-to-many, many-to-many and one-to-one pairs.

pub mod artist;
pub mod artist_song;
pub mod author;
pub mod book;
pub mod driver;
pub mod driving_license;
pub mod owner;
pub mod product;
pub mod registration;
pub mod registry_car;
pub mod review;
pub mod song;
