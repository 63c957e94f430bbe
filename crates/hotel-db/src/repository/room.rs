//! # Room Repository
//!
//! Database operations for rooms.
//!
//! ## Availability
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Room Availability Flag                               │
//! │                                                                         │
//! │   available = 1  ──── ReservationRepository::book ────►  available = 0  │
//! │        ▲                                                     │          │
//! │        └──────────── ReservationRepository::cancel ──────────┘          │
//! │                                                                         │
//! │   update() overwrites the flag as given (operator correction)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use super::ROOM_COLUMNS;
use crate::error::DbResult;
use hotel_core::{NewRoom, Room};

/// Repository for room database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.rooms();
///
/// let room = repo.insert(&NewRoom::new("101", "Single", Money::from_cents(5000))).await?;
/// let free = repo.list_available().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    /// Creates a new RoomRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RoomRepository { pool }
    }

    /// Inserts a room and returns it with its freshly assigned id.
    pub async fn insert(&self, new: &NewRoom) -> DbResult<Room> {
        let room = Room {
            id: generate_room_id(),
            number: new.number.clone(),
            room_type: new.room_type.clone(),
            price_cents: new.price_cents,
            available: new.available,
        };

        debug!(id = %room.id, number = ?room.number, "Inserting room");

        sqlx::query(
            r#"
            INSERT INTO room (id, room_number, type, price_cents, available)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&room.id)
        .bind(&room.number)
        .bind(&room.room_type)
        .bind(room.price_cents)
        .bind(room.available)
        .execute(&self.pool)
        .await?;

        Ok(room)
    }

    /// Overwrites every field of the room with the same id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Room updated
    /// * `Ok(false)` - No room with that id (nothing written)
    pub async fn update(&self, room: &Room) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE room SET
                room_number = ?2,
                type = ?3,
                price_cents = ?4,
                available = ?5
            WHERE id = ?1
            "#,
        )
        .bind(&room.id)
        .bind(&room.number)
        .bind(&room.room_type)
        .bind(room.price_cents)
        .bind(room.available)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a room.
    ///
    /// Fails with `ForeignKeyViolation` while a reservation references it.
    pub async fn delete(&self, id: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM room WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a room by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Room>> {
        let sql = format!("SELECT {ROOM_COLUMNS} FROM room WHERE id = ?1");

        let room = sqlx::query_as::<_, Room>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(room)
    }

    /// Lists every room, ordered by room number.
    pub async fn list_all(&self) -> DbResult<Vec<Room>> {
        let sql = format!("SELECT {ROOM_COLUMNS} FROM room ORDER BY room_number, id");

        let rooms = sqlx::query_as::<_, Room>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rooms)
    }

    /// Lists rooms whose availability flag is set.
    pub async fn list_available(&self) -> DbResult<Vec<Room>> {
        let sql = format!(
            "SELECT {ROOM_COLUMNS} FROM room WHERE available = 1 ORDER BY room_number, id"
        );

        let rooms = sqlx::query_as::<_, Room>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rooms)
    }

    /// Returns `(total, available)` room counts.
    pub async fn counts(&self) -> DbResult<(i64, i64)> {
        let (total, available): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN available = 1 THEN 1 ELSE 0 END), 0)
            FROM room
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((total, available))
    }
}

/// Generates a new room ID.
pub fn generate_room_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use hotel_core::{Money, NewRoom};

    async fn setup() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = setup().await;
        let repo = db.rooms();

        let room = repo
            .insert(&NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();

        let loaded = repo.get_by_id(&room.id).await.unwrap().unwrap();
        assert_eq!(loaded, room);
        assert_eq!(loaded.number.as_deref(), Some("101"));
        assert_eq!(loaded.room_type, "Single");
        assert!(loaded.available);

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_available_filters_occupied() {
        let db = setup().await;
        let repo = db.rooms();

        let free = repo
            .insert(&NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();
        let mut taken = repo
            .insert(&NewRoom::new("102", "Double", Money::from_cents(8000)))
            .await
            .unwrap();
        taken.available = false;
        assert!(repo.update(&taken).await.unwrap());

        let available = repo.list_available().await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, free.id);

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
        assert_eq!(repo.counts().await.unwrap(), (2, 1));
    }

    #[tokio::test]
    async fn test_update_unknown_room_is_noop() {
        let db = setup().await;
        let repo = db.rooms();

        let mut room = repo
            .insert(&NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();
        room.id = "missing".to_string();
        room.price_cents = 1;

        assert!(!repo.update(&room).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap()[0].price_cents, 5000);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup().await;
        let repo = db.rooms();

        let room = repo
            .insert(&NewRoom::new("101", "Single", Money::from_cents(5000)))
            .await
            .unwrap();

        assert!(repo.delete(&room.id).await.unwrap());
        assert!(!repo.delete(&room.id).await.unwrap());
        assert_eq!(repo.counts().await.unwrap(), (0, 0));
    }
}
