//! Operations over the standalone record entities.

pub mod artifact;
pub mod car;
pub mod character;
pub mod hotel_room;
pub mod location;
pub mod pet;
pub mod task;

pub use artifact::{create_artifact, delete_all_artifacts, rename_artifact};
pub use car::{CarPrice, apply_discount, create_car, delete_last_car, get_recent_cars};
pub use character::{
    NewCharacter, create_character, delete_characters, fuse_characters, grand_dexterity,
    grand_intelligence, grand_strength, update_characters,
};
pub use hotel_room::{
    create_hotel_room, delete_last_room, get_deluxe_rooms, increase_room_capacity,
    reserve_first_room,
};
pub use location::{
    create_location, delete_first_location, get_capitals, new_capital, show_all_locations,
};
pub use pet::create_pet;
pub use task::{complete_odd_tasks, create_task, encode_and_replace, show_unfinished_tasks};
