//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod records;
pub mod relations;

// Re-export specific types to avoid conflicts (both groups define a car)
pub use records::{
    artifact::{Column as ArtifactColumn, Entity as Artifact, Model as ArtifactModel},
    car::{Column as CarColumn, Entity as Car, Model as CarModel},
    character::{Column as CharacterColumn, Entity as Character, Model as CharacterModel},
    hotel_room::{Column as HotelRoomColumn, Entity as HotelRoom, Model as HotelRoomModel},
    location::{Column as LocationColumn, Entity as Location, Model as LocationModel},
    pet::{Column as PetColumn, Entity as Pet, Model as PetModel},
    task::{Column as TaskColumn, Entity as Task, Model as TaskModel},
};
pub use relations::{
    artist::{Entity as Artist, Model as ArtistModel},
    artist_song::Entity as ArtistSong,
    author::{Entity as Author, Model as AuthorModel},
    book::{Entity as Book, Model as BookModel},
    driver::{Entity as Driver, Model as DriverModel},
    driving_license::{Entity as DrivingLicense, Model as DrivingLicenseModel},
    owner::{Entity as Owner, Model as OwnerModel},
    product::{Entity as Product, Model as ProductModel},
    registration::{Entity as Registration, Model as RegistrationModel},
    registry_car::{Entity as RegistryCar, Model as RegistryCarModel},
    review::{Entity as Review, Model as ReviewModel},
    song::{Entity as Song, Model as SongModel},
};
