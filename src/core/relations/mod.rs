//! Operations that traverse foreign-key, junction and one-to-one relations.

pub mod library;
pub mod licensing;
pub mod music;
pub mod registry;
pub mod reviews;

pub use library::{
    create_author, create_book, delete_all_authors_without_books,
    show_all_authors_with_their_books,
};
pub use licensing::{
    calculate_licenses_expiration_dates, create_driver, create_license,
    get_drivers_with_expired_licenses,
};
pub use music::{
    add_song_to_artist, create_artist, create_song, get_songs_by_artist, remove_song_from_artist,
};
pub use registry::{
    create_owner, create_registration, create_registry_car, get_owner_by_id,
    register_car_by_owner,
};
pub use reviews::{
    calculate_average_rating_for_product_by_name, create_product, create_review,
    delete_products_without_reviews, get_products_with_no_reviews, get_reviews_with_high_ratings,
};
