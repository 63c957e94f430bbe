//! # Reservation Ledger
//!
//! Creates, confirms and cancels reservations, keeping each room's
//! availability flag in step with the reservation that holds it.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   make()  ──►  PENDING  ── confirm() ──►  CONFIRMED                     │
//! │                   │                           │                         │
//! │                   └────────── cancel() ───────┘                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                    record removed, room available                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A room holds at most one reservation at a time. Availability is a single
//! flag per room, so a booking for next month still blocks the room today.

use chrono::NaiveDate;
use tracing::{info, warn};

use hotel_core::validation::validate_stay_dates;
use hotel_core::{CoreError, Reservation};
use hotel_db::Database;

use crate::error::HotelResult;

/// The reservation lifecycle.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    db: Database,
}

impl ReservationLedger {
    pub fn new(db: Database) -> Self {
        ReservationLedger { db }
    }

    /// Books `room_id` for `client_id`.
    ///
    /// ## Returns
    /// * `Ok(Some(Reservation))` - Booked, unconfirmed; the room is now unavailable
    /// * `Ok(None)` - Room unknown or already held; nothing changed
    ///
    /// ## Errors
    /// * Check-out before check-in
    /// * Unknown client
    pub async fn make(
        &self,
        client_id: &str,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> HotelResult<Option<Reservation>> {
        validate_stay_dates(check_in, check_out)?;

        if self.db.clients().get_by_id(client_id).await?.is_none() {
            return Err(CoreError::ClientNotFound(client_id.to_string()).into());
        }

        let booked = self
            .db
            .reservations()
            .book(client_id, room_id, check_in, check_out)
            .await?;

        match &booked {
            Some(reservation) => info!(
                reservation_id = %reservation.id,
                room_id = %room_id,
                client_id = %client_id,
                %check_in,
                %check_out,
                "Reservation created"
            ),
            None => warn!(room_id = %room_id, "Room unavailable, no reservation created"),
        }

        Ok(booked)
    }

    /// Cancels a reservation and frees its room.
    ///
    /// Returns false for an unknown id. Fails, changing nothing, while
    /// payments or invoices still reference the reservation.
    pub async fn cancel(&self, reservation_id: &str) -> HotelResult<bool> {
        let cancelled = self.db.reservations().cancel(reservation_id).await?;

        if cancelled {
            info!(reservation_id = %reservation_id, "Reservation cancelled");
        } else {
            warn!(reservation_id = %reservation_id, "Cancel ignored: no such reservation");
        }
        Ok(cancelled)
    }

    /// Confirms a reservation. Idempotent; returns false for an unknown id.
    pub async fn confirm(&self, reservation_id: &str) -> HotelResult<bool> {
        let confirmed = self.db.reservations().confirm(reservation_id).await?;

        if confirmed {
            info!(reservation_id = %reservation_id, "Reservation confirmed");
        } else {
            warn!(reservation_id = %reservation_id, "Confirm ignored: no such reservation");
        }
        Ok(confirmed)
    }

    pub async fn list_all(&self) -> HotelResult<Vec<Reservation>> {
        Ok(self.db.reservations().list_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> HotelResult<Option<Reservation>> {
        Ok(self.db.reservations().get_by_id(id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
