//! # Reservation Repository
//!
//! Database operations for reservations, including the two multi-step
//! mutations of the ledger.
//!
//! ## Reservation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reservation Lifecycle                               │
//! │                                                                         │
//! │  1. BOOK (one transaction)                                             │
//! │     └── UPDATE room SET available = 0 WHERE id = ? AND available = 1   │
//! │     └── 0 rows? → rollback, no reservation                             │
//! │     └── INSERT reservation (confirmed = 0)                             │
//! │                                                                         │
//! │  2. CONFIRM                                                            │
//! │     └── UPDATE reservation SET confirmed = 1                           │
//! │                                                                         │
//! │  3. CANCEL (one transaction, write first)                              │
//! │     └── UPDATE room SET available = 1 WHERE id = (reservation's room)  │
//! │     └── 0 rows? → rollback, nothing to cancel                          │
//! │     └── DELETE reservation (fails if payments/invoices reference it)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The conditional UPDATE is what keeps two concurrent bookings of the same
//! room from both succeeding: SQLite serialises writers, and the loser sees
//! zero affected rows.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use super::RESERVATION_COLUMNS;
use crate::error::DbResult;
use hotel_core::{Reservation, Room};

/// Repository for reservation database operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

/// Reservation joined with its room, flattened for `FromRow`.
#[derive(sqlx::FromRow)]
struct ReservationRoomRow {
    id: String,
    client_id: String,
    room_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    confirmed: bool,
    room_number: Option<String>,
    room_type: String,
    price_cents: i64,
    available: bool,
}

impl From<ReservationRoomRow> for (Reservation, Room) {
    fn from(row: ReservationRoomRow) -> Self {
        let room = Room {
            id: row.room_id.clone(),
            number: row.room_number,
            room_type: row.room_type,
            price_cents: row.price_cents,
            available: row.available,
        };
        let reservation = Reservation {
            id: row.id,
            client_id: row.client_id,
            room_id: row.room_id,
            check_in: row.check_in,
            check_out: row.check_out,
            confirmed: row.confirmed,
        };
        (reservation, room)
    }
}

const RESERVATION_ROOM_SELECT: &str = r#"
    SELECT
        r.id,
        r.client_id,
        r.room_id,
        r.check_in,
        r.check_out,
        r.confirmed,
        rm.room_number,
        rm.type AS room_type,
        rm.price_cents,
        rm.available
    FROM reservation r
    INNER JOIN room rm ON rm.id = r.room_id
"#;

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReservationRepository { pool }
    }

    /// Claims the room and inserts an unconfirmed reservation atomically.
    ///
    /// ## Returns
    /// * `Ok(Some(Reservation))` - Room claimed, reservation created
    /// * `Ok(None)` - Room unknown or already unavailable; nothing written
    pub async fn book(
        &self,
        client_id: &str,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DbResult<Option<Reservation>> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query("UPDATE room SET available = 0 WHERE id = ?1 AND available = 1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        if claimed.rows_affected() == 0 {
            debug!(room_id = %room_id, "Room not claimable");
            tx.rollback().await?;
            return Ok(None);
        }

        let reservation = Reservation {
            id: generate_reservation_id(),
            client_id: client_id.to_string(),
            room_id: room_id.to_string(),
            check_in,
            check_out,
            confirmed: false,
        };

        sqlx::query(
            r#"
            INSERT INTO reservation (id, client_id, room_id, check_in, check_out, confirmed)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&reservation.id)
        .bind(&reservation.client_id)
        .bind(&reservation.room_id)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .bind(reservation.confirmed)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(id = %reservation.id, room_id = %room_id, "Reservation inserted");
        Ok(Some(reservation))
    }

    /// Frees the room and deletes the reservation atomically.
    ///
    /// ## Returns
    /// * `Ok(true)` - Reservation removed, room available again
    /// * `Ok(false)` - No reservation with that id
    ///
    /// If payments or invoices still reference the reservation the delete
    /// fails and the room flag is rolled back with it.
    ///
    /// The first statement is a write, so the transaction takes the write
    /// lock before it reads anything. A read-first transaction would be
    /// refused with `SQLITE_BUSY_SNAPSHOT` once another writer commits.
    pub async fn cancel(&self, reservation_id: &str) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;

        let freed = sqlx::query(
            r#"
            UPDATE room SET available = 1
            WHERE id = (SELECT room_id FROM reservation WHERE id = ?1)
            "#,
        )
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

        if freed.rows_affected() == 0 {
            debug!(id = %reservation_id, "No reservation to cancel");
            tx.rollback().await?;
            return Ok(false);
        }

        let deleted = sqlx::query("DELETE FROM reservation WHERE id = ?1")
            .bind(reservation_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;

        debug!(id = %reservation_id, "Reservation deleted, room freed");
        Ok(true)
    }

    /// Marks a reservation confirmed. Returns false for an unknown id.
    pub async fn confirm(&self, reservation_id: &str) -> DbResult<bool> {
        let result = sqlx::query("UPDATE reservation SET confirmed = 1 WHERE id = ?1")
            .bind(reservation_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a reservation by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Reservation>> {
        let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservation WHERE id = ?1");

        let reservation = sqlx::query_as::<_, Reservation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reservation)
    }

    /// Gets a reservation together with the room it holds.
    pub async fn get_with_room(&self, id: &str) -> DbResult<Option<(Reservation, Room)>> {
        let sql = format!("{RESERVATION_ROOM_SELECT} WHERE r.id = ?1");

        let row = sqlx::query_as::<_, ReservationRoomRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Lists every reservation, ordered by check-in date.
    pub async fn list_all(&self) -> DbResult<Vec<Reservation>> {
        let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservation ORDER BY check_in, id");

        let reservations = sqlx::query_as::<_, Reservation>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    /// Lists the reservations of one client, ordered by check-in date.
    pub async fn find_by_client(&self, client_id: &str) -> DbResult<Vec<Reservation>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservation WHERE client_id = ?1 ORDER BY check_in, id"
        );

        let reservations = sqlx::query_as::<_, Reservation>(&sql)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    /// Like [`find_by_client`](Self::find_by_client), with each reservation's room.
    pub async fn find_by_client_with_room(
        &self,
        client_id: &str,
    ) -> DbResult<Vec<(Reservation, Room)>> {
        let sql = format!("{RESERVATION_ROOM_SELECT} WHERE r.client_id = ?1 ORDER BY r.check_in, r.id");

        let rows = sqlx::query_as::<_, ReservationRoomRow>(&sql)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Generates a new reservation ID.
pub fn generate_reservation_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
