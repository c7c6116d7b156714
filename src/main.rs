use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use orm_drills::{
    config::{database, seed::load_seed},
    core::{records, relations},
    errors::Result,
    seed::populate,
};
use sea_orm::{DatabaseConnection, prelude::Date};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "orm-drills",
    version,
    about = "Run CRUD and aggregate query drills against a SQLite database"
)]
struct Cli {
    /// Database URL; falls back to `DATABASE_URL`, then a local SQLite file
    #[arg(long, global = true, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create all tables
    Init,
    /// Insert the rows described by a TOML seed file
    Seed {
        /// Path to the seed file
        file: PathBuf,
    },
    /// List all locations, newest first
    Locations,
    /// Promote the first location to capital
    NewCapital,
    /// List the names of capital locations
    Capitals,
    /// Recompute discounted prices of all catalogue cars
    ApplyDiscount,
    /// List recent cars with their discounted prices
    RecentCars,
    /// List unfinished tasks
    UnfinishedTasks,
    /// Finish every unfinished task with an odd id
    CompleteOddTasks,
    /// Store an encoded text as the description of tasks with a title
    EncodeTask {
        /// Text to encode
        text: String,
        /// Title of the tasks to update
        title: String,
    },
    /// List Deluxe rooms with even ids
    DeluxeRooms,
    /// Grow the capacity of reserved rooms
    IncreaseCapacity,
    /// Reserve the first free room
    ReserveRoom,
    /// Apply per-class character adjustments
    UpdateCharacters,
    /// List authors with their books
    Authors,
    /// Delete authors who have not written a book
    PruneAuthors,
    /// Link a song to an artist
    AddSong {
        /// Artist name
        artist: String,
        /// Song title
        song: String,
    },
    /// List songs performed by an artist
    Songs {
        /// Artist name
        artist: String,
    },
    /// Unlink a song from an artist
    RemoveSong {
        /// Artist name
        artist: String,
        /// Song title
        song: String,
    },
    /// Average review rating of a product
    AvgRating {
        /// Product name
        product: String,
    },
    /// List reviews rated at least a threshold
    HighRatings {
        /// Minimum rating
        threshold: i32,
    },
    /// List products nobody has reviewed
    UnreviewedProducts,
    /// List license expiration dates
    Licenses,
    /// List drivers whose license was issued within a year before a date
    ExpiredLicenses {
        /// Reference date, `YYYY-MM-DD`
        due_date: Date,
    },
    /// Register the next free car to an owner
    RegisterCar {
        /// Owner id
        owner_id: i64,
    },
    /// Set one stat to its fixed value on every character
    Grant {
        /// Stat to set
        stat: Stat,
    },
    /// Delete rows selected by a fixed rule
    Prune {
        /// Which rows to delete
        target: PruneTarget,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stat {
    Dexterity,
    Intelligence,
    Strength,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PruneTarget {
    /// Every artifact
    Artifacts,
    /// The first stored location
    FirstLocation,
    /// The last stored catalogue car
    LastCar,
    /// The last stored room, unless reserved
    LastRoom,
    /// Characters with an emptied inventory
    Characters,
    /// Products nobody has reviewed
    UnreviewedProducts,
}

async fn prune(db: &DatabaseConnection, target: PruneTarget) -> Result<()> {
    match target {
        PruneTarget::Artifacts => {
            let deleted = records::delete_all_artifacts(db).await?;
            println!("Deleted {deleted} artifacts");
        }
        PruneTarget::FirstLocation => records::delete_first_location(db).await?,
        PruneTarget::LastCar => records::delete_last_car(db).await?,
        PruneTarget::LastRoom => records::delete_last_room(db).await?,
        PruneTarget::Characters => {
            let deleted = records::delete_characters(db).await?;
            println!("Deleted {deleted} characters");
        }
        PruneTarget::UnreviewedProducts => {
            let deleted = relations::delete_products_without_reviews(db).await?;
            println!("Deleted {deleted} products");
        }
    }
    Ok(())
}

async fn run(db: &DatabaseConnection, command: Command) -> Result<()> {
    match command {
        Command::Init => info!("Tables ready"),
        Command::Seed { file } => {
            let seed = load_seed(&file)?;
            let summary = populate(db, &seed).await?;
            println!(
                "Seeded {} record rows and {} relation rows",
                summary.records, summary.relations
            );
        }
        Command::Locations => println!("{}", records::show_all_locations(db).await?),
        Command::NewCapital => {
            let capital = records::new_capital(db).await?;
            println!("{} is now a capital", capital.name);
        }
        Command::Capitals => {
            for name in records::get_capitals(db).await? {
                println!("{name}");
            }
        }
        Command::ApplyDiscount => records::apply_discount(db).await?,
        Command::RecentCars => {
            for car in records::get_recent_cars(db).await? {
                println!("{} {:.2}", car.model, car.price_with_discount);
            }
        }
        Command::UnfinishedTasks => println!("{}", records::show_unfinished_tasks(db).await?),
        Command::CompleteOddTasks => {
            let updated = records::complete_odd_tasks(db).await?;
            println!("Completed {updated} tasks");
        }
        Command::EncodeTask { text, title } => {
            let updated = records::encode_and_replace(db, &text, &title).await?;
            println!("Updated {updated} tasks");
        }
        Command::DeluxeRooms => println!("{}", records::get_deluxe_rooms(db).await?),
        Command::IncreaseCapacity => records::increase_room_capacity(db).await?,
        Command::ReserveRoom => records::reserve_first_room(db).await?,
        Command::UpdateCharacters => records::update_characters(db).await?,
        Command::Authors => {
            println!("{}", relations::show_all_authors_with_their_books(db).await?);
        }
        Command::PruneAuthors => {
            let deleted = relations::delete_all_authors_without_books(db).await?;
            println!("Deleted {deleted} authors");
        }
        Command::AddSong { artist, song } => {
            relations::add_song_to_artist(db, &artist, &song).await?;
        }
        Command::Songs { artist } => {
            for song in relations::get_songs_by_artist(db, &artist).await? {
                println!("{}", song.title);
            }
        }
        Command::RemoveSong { artist, song } => {
            relations::remove_song_from_artist(db, &artist, &song).await?;
        }
        Command::AvgRating { product } => {
            match relations::calculate_average_rating_for_product_by_name(db, &product).await? {
                Some(average) => println!("{average:.2}"),
                None => println!("{product} has no reviews"),
            }
        }
        Command::HighRatings { threshold } => {
            for review in relations::get_reviews_with_high_ratings(db, threshold).await? {
                println!("{} ({})", review.description, review.rating);
            }
        }
        Command::UnreviewedProducts => {
            for product in relations::get_products_with_no_reviews(db).await? {
                println!("{}", product.name);
            }
        }
        Command::Licenses => {
            println!("{}", relations::calculate_licenses_expiration_dates(db).await?);
        }
        Command::ExpiredLicenses { due_date } => {
            for driver in relations::get_drivers_with_expired_licenses(db, due_date).await? {
                println!("{} {}", driver.first_name, driver.last_name);
            }
        }
        Command::RegisterCar { owner_id } => {
            let owner = relations::get_owner_by_id(db, owner_id).await?;
            println!("{}", relations::register_car_by_owner(db, &owner).await?);
        }
        Command::Grant { stat } => {
            let updated = match stat {
                Stat::Dexterity => records::grand_dexterity(db).await?,
                Stat::Intelligence => records::grand_intelligence(db).await?,
                Stat::Strength => records::grand_strength(db).await?,
            };
            println!("Updated {updated} characters");
        }
        Command::Prune { target } => prune(db, target).await?,
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Parse arguments after .env so `DATABASE_URL` from the file is honoured
    let cli = Cli::parse();
    let database_url = cli.database_url.unwrap_or_else(database::get_database_url);

    // 4. Connect and make sure the schema exists
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Run the requested drill
    run(&db, cli.command)
        .await
        .inspect_err(|e| error!("Command failed: {}", e))
}
