//! Standalone record entities. None of these tables reference each other.

pub mod artifact;
pub mod car;
pub mod character;
pub mod hotel_room;
pub mod location;
pub mod pet;
pub mod task;
