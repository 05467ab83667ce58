//! # Seed Roster
//!
//! Populates the database with a fixed roster of persons and prints one
//! house as JSON.
//!
//! ## Usage
//! ```bash
//! # Seed into ./got.db (or GOT_DB_PATH) and print house Stark
//! cargo run -p got-db --bin seed
//!
//! # Start from an empty table and print another house
//! cargo run -p got-db --bin seed -- --reset --house Lannister
//!
//! # Specify database path
//! cargo run -p got-db --bin seed -- --db ./data/got.db
//! ```
//!
//! Rows whose (name, city, house) already exist are rejected by the unique
//! key and reported, so running the seed twice leaves one copy of each.

use std::env;

use got_core::Person;
use got_db::{global, DbConfig, Repository};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// (name, city, house)
const ROSTER: &[(&str, &str, &str)] = &[
    ("Eddard", "Winterfell", "Stark"),
    ("Catelyn", "Winterfell", "Stark"),
    ("Sansa", "Winterfell", "Stark"),
    ("Arya", "Winterfell", "Stark"),
    ("Jon", "Castle Black", "Stark"),
    ("Tywin", "Casterly Rock", "Lannister"),
    ("Cersei", "King's Landing", "Lannister"),
    ("Jaime", "King's Landing", "Lannister"),
    ("Tyrion", "Casterly Rock", "Lannister"),
    ("Daenerys", "Dragonstone", "Targaryen"),
    ("Viserys", "Pentos", "Targaryen"),
    ("Stannis", "Dragonstone", "Baratheon"),
    ("Renly", "Storm's End", "Baratheon"),
    ("Olenna", "Highgarden", "Tyrell"),
    ("Margaery", "Highgarden", "Tyrell"),
    ("Theon", "Pyke", "Greyjoy"),
    ("Yara", "Pyke", "Greyjoy"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut config = DbConfig::from_env()?;
    let mut reset = false;
    let mut house = "Stark".to_string();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--house" => {
                if i + 1 < args.len() {
                    house = args[i + 1].clone();
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Person roster seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: GOT_DB_PATH or ./got.db)");
                println!("      --house <NAME>  House to print after seeding (default: Stark)");
                println!("      --reset         Delete every person before seeding");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
        i += 1;
    }

    let db = global::init(config).await?;
    info!(path = %db.config().database_path.display(), "Database ready");

    let repo = global::repository().await?;
    if reset {
        repo.delete_all().await;
        info!("Cleared person table");
    }

    let mut inserted = 0;
    for (name, city, member_house) in ROSTER {
        let saved = repo.save(Person::new(*name, *city, *member_house)).await;
        match saved.id {
            Some(id) => {
                inserted += 1;
                info!(id = %id, name = %saved.name, "Seeded person");
            }
            None => eprintln!("Skipped {name} of {city} ({member_house}): already present or store error"),
        }
    }

    let total = repo.strict().count().await?;
    println!("Inserted {inserted} persons, {total} in table");

    let members = repo.find_by_house(&house).await;
    println!("{}", serde_json::to_string_pretty(&members)?);

    global::teardown().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=got_db=trace` - Show trace for the persistence crate only
/// - Default: INFO, DEBUG for got crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,got_db=debug,got_core=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
