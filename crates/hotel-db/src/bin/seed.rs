//! # Seed Data Generator
//!
//! Populates the database with rooms for development.
//!
//! ## Usage
//! ```bash
//! # 5 floors x 10 rooms (default)
//! cargo run -p hotel-db --bin seed
//!
//! # Custom layout
//! cargo run -p hotel-db --bin seed -- --floors 8 --rooms-per-floor 12
//!
//! # Specify database path
//! cargo run -p hotel-db --bin seed -- --db ./data/hotel.db
//! ```
//!
//! ## Generated Rooms
//! Room numbers follow the usual `{floor}{index:02}` scheme (101, 102, ...
//! 512). The type cycles with the position on the corridor and the price
//! rises by floor:
//! - Single: 50.00 base
//! - Double: 80.00 base
//! - Twin: 85.00 base
//! - Suite: 120.00 base (last room of each floor)

use std::env;

use hotel_core::{Money, NewRoom};
use hotel_db::{Database, DbConfig};

/// Corridor layout: type and base nightly price in cents.
const ROOM_TYPES: &[(&str, i64)] = &[("Single", 5000), ("Double", 8000), ("Twin", 8500)];

const SUITE: (&str, i64) = ("Suite", 12000);

/// Added per floor above the first, in cents.
const FLOOR_PREMIUM_CENTS: i64 = 500;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut floors: u32 = 5;
    let mut rooms_per_floor: u32 = 10;
    let mut db_path = String::from("./hotel_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--floors" | "-f" => {
                if i + 1 < args.len() {
                    floors = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "--rooms-per-floor" | "-r" => {
                if i + 1 < args.len() {
                    rooms_per_floor = args[i + 1].parse().unwrap_or(10).clamp(1, 99);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Hotel Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --floors <N>            Number of floors (default: 5)");
                println!("  -r, --rooms-per-floor <N>   Rooms on each floor (default: 10)");
                println!("  -d, --db <PATH>             Database file path (default: ./hotel_dev.db)");
                println!("  -h, --help                  Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Hotel Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!("Layout:   {} floors x {} rooms", floors, rooms_per_floor);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let (existing, _) = db.rooms().counts().await?;
    if existing > 0 {
        println!("⚠ Database already has {} rooms", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating rooms...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for floor in 1..=floors {
        for index in 1..=rooms_per_floor {
            let room = generate_room(floor, index, rooms_per_floor);

            if let Err(e) = db.rooms().insert(&room).await {
                eprintln!("Failed to insert room {:?}: {}", room.number, e);
                continue;
            }

            generated += 1;
        }
    }

    let elapsed = start.elapsed();
    let (total, available) = db.rooms().counts().await?;

    println!();
    println!("✓ Generated {} rooms in {:?}", generated, elapsed);
    println!("  Total: {}, available: {}", total, available);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds the room at `index` on `floor`.
fn generate_room(floor: u32, index: u32, rooms_per_floor: u32) -> NewRoom {
    let number = format!("{}{:02}", floor, index);

    let (room_type, base_cents) = if index == rooms_per_floor && rooms_per_floor > 1 {
        SUITE
    } else {
        ROOM_TYPES[(index as usize - 1) % ROOM_TYPES.len()]
    };

    let price = Money::from_cents(base_cents + FLOOR_PREMIUM_CENTS * i64::from(floor - 1));

    NewRoom::new(number, room_type, price)
}
