//! # Reporting
//!
//! Read-only summaries. Data is gathered here and rendered by
//! `hotel_core::report`.

use hotel_core::report::{
    format_client_history, format_occupancy, format_revenue, HistoryLine, OccupancySnapshot,
};
use hotel_core::{Client, Money};
use hotel_db::Database;

use crate::error::HotelResult;

/// Occupancy, revenue and per-client history reports.
#[derive(Debug, Clone)]
pub struct Reporting {
    db: Database,
}

impl Reporting {
    pub fn new(db: Database) -> Self {
        Reporting { db }
    }

    /// Current room counts.
    pub async fn occupancy(&self) -> HotelResult<OccupancySnapshot> {
        let (total, available) = self.db.rooms().counts().await?;
        Ok(OccupancySnapshot {
            total: usize::try_from(total).unwrap_or_default(),
            available: usize::try_from(available).unwrap_or_default(),
        })
    }

    pub async fn occupancy_report(&self) -> HotelResult<String> {
        Ok(format_occupancy(&self.occupancy().await?))
    }

    pub async fn revenue_report(&self) -> HotelResult<String> {
        let cents = self.db.payments().total_revenue().await?;
        Ok(format_revenue(Money::from_cents(cents)))
    }

    /// History lines of one client, oldest check-in first.
    pub async fn client_history(&self, client_id: &str) -> HotelResult<Vec<HistoryLine>> {
        let rows = self
            .db
            .reservations()
            .find_by_client_with_room(client_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reservation, room)| HistoryLine {
                room_label: room.label().to_string(),
                reservation_id: reservation.id,
                check_in: reservation.check_in,
                check_out: reservation.check_out,
                confirmed: reservation.confirmed,
            })
            .collect())
    }

    /// Renders the history of `client`, or a placeholder when no client is
    /// selected.
    pub async fn client_history_report(&self, client: Option<&Client>) -> HotelResult<String> {
        let lines = match client {
            Some(client) => self.client_history(&client.id).await?,
            None => Vec::new(),
        };
        Ok(format_client_history(client, &lines))
    }
}
