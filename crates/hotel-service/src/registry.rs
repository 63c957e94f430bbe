//! # Room and Client Registries
//!
//! CRUD over rooms and clients with input validation in front of the
//! repositories.

use tracing::{debug, info};

use hotel_core::validation::{
    validate_client_name, validate_email, validate_new_client, validate_new_room, validate_room,
};
use hotel_core::{Client, NewClient, NewRoom, Reservation, Room};
use hotel_db::Database;

use crate::error::HotelResult;

// =============================================================================
// Rooms
// =============================================================================

/// Room records and their availability flags.
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    db: Database,
}

impl RoomRegistry {
    pub fn new(db: Database) -> Self {
        RoomRegistry { db }
    }

    /// Registers a room. Type is required and the price may not be negative.
    pub async fn add(&self, new_room: NewRoom) -> HotelResult<Room> {
        validate_new_room(&new_room)?;

        let room = self.db.rooms().insert(&new_room).await?;
        info!(room_id = %room.id, number = %room.label(), "Room added");
        Ok(room)
    }

    /// Overwrites a room by id. Unknown ids are ignored; returns whether a
    /// row was written.
    pub async fn update(&self, room: &Room) -> HotelResult<bool> {
        validate_room(room)?;

        let updated = self.db.rooms().update(room).await?;
        debug!(room_id = %room.id, updated, "Room update");
        Ok(updated)
    }

    /// Removes a room by id. Unknown ids are ignored.
    ///
    /// A room that a reservation still references cannot be removed; the
    /// database refuses and the error is returned.
    pub async fn delete(&self, id: &str) -> HotelResult<bool> {
        let deleted = self.db.rooms().delete(id).await?;
        if deleted {
            info!(room_id = %id, "Room deleted");
        }
        Ok(deleted)
    }

    pub async fn list_all(&self) -> HotelResult<Vec<Room>> {
        Ok(self.db.rooms().list_all().await?)
    }

    /// Rooms whose availability flag is set.
    pub async fn list_available(&self) -> HotelResult<Vec<Room>> {
        Ok(self.db.rooms().list_available().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> HotelResult<Option<Room>> {
        Ok(self.db.rooms().get_by_id(id).await?)
    }
}

// =============================================================================
// Clients
// =============================================================================

/// Client records and the per-client reservation index.
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    db: Database,
}

impl ClientRegistry {
    pub fn new(db: Database) -> Self {
        ClientRegistry { db }
    }

    /// Registers a client. Names need not be unique.
    pub async fn add(&self, new_client: NewClient) -> HotelResult<Client> {
        validate_new_client(&new_client)?;

        let client = self.db.clients().insert(&new_client).await?;
        info!(client_id = %client.id, "Client added");
        Ok(client)
    }

    /// Overwrites a client's details. Unknown ids are ignored.
    pub async fn update(&self, client: &Client) -> HotelResult<bool> {
        validate_client_name(&client.name)?;
        validate_email(&client.email)?;

        Ok(self.db.clients().update(client).await?)
    }

    pub async fn list_all(&self) -> HotelResult<Vec<Client>> {
        Ok(self.db.clients().list_all().await?)
    }

    /// Case-insensitive exact match on the name; the first match wins.
    pub async fn find_by_name(&self, name: &str) -> HotelResult<Option<Client>> {
        Ok(self.db.clients().find_by_name(name.trim()).await?)
    }

    pub async fn find_by_id(&self, id: &str) -> HotelResult<Option<Client>> {
        Ok(self.db.clients().get_by_id(id).await?)
    }

    /// Reservations currently held by the client.
    pub async fn reservations_of(&self, client_id: &str) -> HotelResult<Vec<Reservation>> {
        Ok(self.db.reservations().find_by_client(client_id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, HotelError};
    use crate::HotelServices;
    use chrono::NaiveDate;
    use hotel_core::{CoreError, Money, ValidationError};
    use hotel_db::DbConfig;

    async fn setup() -> HotelServices {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        HotelServices::new(db)
    }

    #[tokio::test]
    async fn test_add_room_validates() {
        let services = setup().await;
        let rooms = services.rooms();

        let err = rooms
            .add(NewRoom::new("101", "  ", Money::from_cents(5000)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = rooms
            .add(NewRoom::new("101", "Single", Money::from_cents(-1)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HotelError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        assert!(rooms.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_room() {
        let services = setup().await;
        let rooms = services.rooms();

        let mut room = rooms
            .add(NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();
        room.room_type = "Double".to_string();
        room.price_cents = 8000;
        assert!(rooms.update(&room).await.unwrap());

        let loaded = rooms.get_by_id(&room.id).await.unwrap().unwrap();
        assert_eq!(loaded.room_type, "Double");
        assert_eq!(loaded.price(), Money::from_cents(8000));

        // Unknown id: nothing happens.
        room.id = "00000000-0000-4000-8000-000000000000".to_string();
        assert!(!rooms.update(&room).await.unwrap());
        room.id = "not-a-uuid".to_string();
        assert!(!rooms.update(&room).await.unwrap());
        assert_eq!(rooms.list_all().await.unwrap().len(), 1);
        assert_eq!(rooms.list_all().await.unwrap()[0].room_type, "Double");
    }

    #[tokio::test]
    async fn test_delete_room_refused_while_reserved() {
        let services = setup().await;
        let room = services
            .rooms()
            .add(NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();
        let client = services
            .clients()
            .add(NewClient::new("Alice", "", ""))
            .await
            .unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        services
            .ledger()
            .make(&client.id, &room.id, day, day)
            .await
            .unwrap()
            .unwrap();

        let err = services.rooms().delete(&room.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BusinessLogic);
        assert!(services.rooms().get_by_id(&room.id).await.unwrap().is_some());

        assert!(!services.rooms().delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_clients() {
        let services = setup().await;
        let clients = services.clients();

        let alice = clients
            .add(NewClient::new("Alice", "1234 Avenue Street", "alice@example.com"))
            .await
            .unwrap();
        // Duplicate names are allowed.
        clients
            .add(NewClient::new("Alice", "elsewhere", ""))
            .await
            .unwrap();

        assert_eq!(clients.list_all().await.unwrap().len(), 2);
        assert!(clients.find_by_name(" ALICE ").await.unwrap().is_some());
        assert!(clients.find_by_name("Bob").await.unwrap().is_none());
        assert_eq!(
            clients.find_by_id(&alice.id).await.unwrap().unwrap().email,
            "alice@example.com"
        );
        assert!(clients.reservations_of(&alice.id).await.unwrap().is_empty());

        let err = clients.add(NewClient::new("", "", "")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }
}
