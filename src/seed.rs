//! Populates a database from [`SeedData`].
//!
//! Rows are inserted through the regular `create_*` operations, so seeding is
//! subject to the same validation as any other insert. Parents go in before
//! children and songs before the artists that link to them. The whole seed runs
//! in one transaction, so a failing row leaves the database as it was.

use crate::{
    config::seed::SeedData,
    core::{
        records::{self, NewCharacter},
        relations,
    },
    errors::Result,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

/// Number of rows inserted per table group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Rows inserted into the standalone record tables
    pub records: usize,
    /// Rows inserted into the related tables, junction rows included
    pub relations: usize,
}

async fn seed_records<C: ConnectionTrait>(db: &C, seed: &SeedData) -> Result<usize> {
    let mut inserted = 0;

    for pet in &seed.pets {
        records::create_pet(db, &pet.name, &pet.species).await?;
        inserted += 1;
    }
    for artifact in &seed.artifacts {
        records::create_artifact(
            db,
            &artifact.name,
            &artifact.origin,
            artifact.age,
            &artifact.description,
            artifact.is_magical,
        )
        .await?;
        inserted += 1;
    }
    for location in &seed.locations {
        records::create_location(
            db,
            &location.name,
            &location.region,
            location.population,
            &location.description,
            location.is_capital,
        )
        .await?;
        inserted += 1;
    }
    for car in &seed.cars {
        records::create_car(db, &car.model, car.year, &car.color, car.price).await?;
        inserted += 1;
    }
    for task in &seed.tasks {
        records::create_task(
            db,
            &task.title,
            &task.description,
            task.due_date,
            task.is_finished,
        )
        .await?;
        inserted += 1;
    }
    for room in &seed.hotel_rooms {
        records::create_hotel_room(
            db,
            room.room_number,
            room.room_type,
            room.capacity,
            &room.amenities,
            room.price_per_night,
            room.is_reserved,
        )
        .await?;
        inserted += 1;
    }
    for character in &seed.characters {
        records::create_character(
            db,
            NewCharacter {
                name: character.name.clone(),
                class_name: character.class_name,
                level: character.level,
                strength: character.strength,
                dexterity: character.dexterity,
                intelligence: character.intelligence,
                hit_points: character.hit_points,
                inventory: character.inventory.clone(),
            },
        )
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}

async fn seed_relations<C: ConnectionTrait>(db: &C, seed: &SeedData) -> Result<usize> {
    let mut inserted = 0;

    for author_seed in &seed.authors {
        let author = relations::create_author(db, &author_seed.name).await?;
        inserted += 1;
        for book in &author_seed.books {
            relations::create_book(db, &book.title, book.price, author.id).await?;
            inserted += 1;
        }
    }

    for title in &seed.songs {
        relations::create_song(db, title).await?;
        inserted += 1;
    }
    for artist_seed in &seed.artists {
        relations::create_artist(db, &artist_seed.name).await?;
        inserted += 1;
        for title in &artist_seed.songs {
            relations::add_song_to_artist(db, &artist_seed.name, title).await?;
            inserted += 1;
        }
    }

    for product_seed in &seed.products {
        let product = relations::create_product(db, &product_seed.name).await?;
        inserted += 1;
        for review in &product_seed.reviews {
            relations::create_review(db, &review.description, review.rating, product.id).await?;
            inserted += 1;
        }
    }

    for driver_seed in &seed.drivers {
        let driver =
            relations::create_driver(db, &driver_seed.first_name, &driver_seed.last_name).await?;
        inserted += 1;
        if let Some(license) = &driver_seed.license {
            relations::create_license(db, &license.license_number, license.issue_date, driver.id)
                .await?;
            inserted += 1;
        }
    }

    for name in &seed.owners {
        relations::create_owner(db, name).await?;
        inserted += 1;
    }
    for car in &seed.registry_cars {
        relations::create_registry_car(db, &car.model, car.year, None).await?;
        inserted += 1;
    }
    for number in &seed.registrations {
        relations::create_registration(db, number).await?;
        inserted += 1;
    }

    Ok(inserted)
}

/// Inserts every row described by `seed`.
#[instrument(skip_all)]
pub async fn populate(db: &DatabaseConnection, seed: &SeedData) -> Result<SeedSummary> {
    let txn = db.begin().await?;
    let summary = SeedSummary {
        records: seed_records(&txn, seed).await?,
        relations: seed_relations(&txn, seed).await?,
    };
    txn.commit().await?;
    info!(
        records = summary.records,
        relations = summary.relations,
        "Seed data inserted"
    );
    Ok(summary)
}
