//! Starter rooms and clients for a fresh database.

use tracing::info;

use hotel_core::{Money, NewClient, NewRoom};
use hotel_db::Database;

use crate::error::HotelResult;
use crate::registry::{ClientRegistry, RoomRegistry};

const SAMPLE_ROOMS: &[(&str, &str, i64)] = &[
    ("101", "Single", 5000),
    ("102", "Double", 8000),
    ("201", "Suite", 12000),
];

const SAMPLE_CLIENTS: &[(&str, &str, &str)] = &[
    ("Alice", "1234 Avenue Street", "alice@example.com"),
    ("Bob", "5678 Boulevard", "bob@example.com"),
];

/// What [`seed_sample_data`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub rooms: usize,
    pub clients: usize,
}

/// Inserts the sample rooms when there are no rooms and the sample clients
/// when there are no clients. Tables that already hold data are left alone.
pub async fn seed_sample_data(db: &Database) -> HotelResult<SeedOutcome> {
    let mut outcome = SeedOutcome::default();

    let (room_count, _) = db.rooms().counts().await?;
    if room_count == 0 {
        let rooms = RoomRegistry::new(db.clone());
        for (number, room_type, cents) in SAMPLE_ROOMS {
            rooms
                .add(NewRoom::new(*number, *room_type, Money::from_cents(*cents)))
                .await?;
            outcome.rooms += 1;
        }
    }

    if db.clients().count().await? == 0 {
        let clients = ClientRegistry::new(db.clone());
        for (name, contact, email) in SAMPLE_CLIENTS {
            clients.add(NewClient::new(*name, *contact, *email)).await?;
            outcome.clients += 1;
        }
    }

    if outcome != SeedOutcome::default() {
        info!(rooms = outcome.rooms, clients = outcome.clients, "Sample data seeded");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_db::DbConfig;

    #[tokio::test]
    async fn test_seed_only_empty_tables() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let first = seed_sample_data(&db).await.unwrap();
        assert_eq!(first, SeedOutcome { rooms: 3, clients: 2 });

        let second = seed_sample_data(&db).await.unwrap();
        assert_eq!(second, SeedOutcome::default());

        let rooms = db.rooms().list_all().await.unwrap();
        let numbers: Vec<&str> = rooms.iter().map(|r| r.label()).collect();
        assert_eq!(numbers, vec!["101", "102", "201"]);
        assert!(rooms.iter().all(|r| r.available));

        let bob = db.clients().find_by_name("bob").await.unwrap().unwrap();
        assert_eq!(bob.contact, "5678 Boulevard");
    }
}
