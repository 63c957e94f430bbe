//! # Report Formatting
//!
//! Pure rendering of the occupancy, revenue and client-history reports.
//! Data gathering happens in `hotel-service`; everything here is text.

use chrono::NaiveDate;
use serde::Serialize;

use crate::money::Money;
use crate::types::Client;

/// Room counts at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancySnapshot {
    pub total: usize,
    pub available: usize,
}

impl OccupancySnapshot {
    /// Rooms currently held by a reservation.
    pub fn occupied(&self) -> usize {
        self.total.saturating_sub(self.available)
    }

    /// Occupied rooms as a percentage of all rooms; 0 for an empty hotel.
    pub fn rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied() as f64 / self.total as f64 * 100.0
    }
}

/// One reservation line of a client history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLine {
    pub reservation_id: String,
    /// Room number, or room id when the room is unnumbered.
    pub room_label: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub confirmed: bool,
}

pub fn format_occupancy(snapshot: &OccupancySnapshot) -> String {
    format!(
        "Occupancy Report:\n\
         Total rooms: {}\n\
         Rooms occupied: {}\n\
         Rooms available: {}\n\
         Occupancy rate: {:.2}%",
        snapshot.total,
        snapshot.occupied(),
        snapshot.available,
        snapshot.rate_percent()
    )
}

pub fn format_revenue(total: Money) -> String {
    format!("Revenue Report:\nTotal revenue: {}", total)
}

/// Renders a client's booking history.
///
/// `None` means no client was selected (or the lookup found nobody).
pub fn format_client_history(client: Option<&Client>, lines: &[HistoryLine]) -> String {
    let Some(client) = client else {
        return "No client selected.".to_string();
    };

    let mut out = format!("History for client: {} (id={})\n", client.name, client.id);

    if lines.is_empty() {
        out.push_str("No reservations found.\n");
        return out;
    }

    for line in lines {
        out.push_str(&format!(
            "Reservation {} - Room {} ({} → {}) - Confirmed: {}\n",
            line.reservation_id,
            line.room_label,
            line.check_in,
            line.check_out,
            if line.confirmed { "yes" } else { "no" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Client {
        Client {
            id: "c-1".to_string(),
            name: "Alice".to_string(),
            contact: "1234 Avenue Street".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_occupancy_two_of_three() {
        let snapshot = OccupancySnapshot {
            total: 3,
            available: 1,
        };
        let report = format_occupancy(&snapshot);
        assert_eq!(
            report,
            "Occupancy Report:\nTotal rooms: 3\nRooms occupied: 2\nRooms available: 1\nOccupancy rate: 66.67%"
        );
    }

    #[test]
    fn test_occupancy_empty_hotel() {
        let snapshot = OccupancySnapshot {
            total: 0,
            available: 0,
        };
        assert_eq!(snapshot.rate_percent(), 0.0);
        assert!(format_occupancy(&snapshot).ends_with("Occupancy rate: 0.00%"));
    }

    #[test]
    fn test_revenue() {
        assert_eq!(
            format_revenue(Money::zero()),
            "Revenue Report:\nTotal revenue: 0.00"
        );
        assert_eq!(
            format_revenue(Money::from_cents(45050)),
            "Revenue Report:\nTotal revenue: 450.50"
        );
    }

    #[test]
    fn test_history_without_client() {
        assert_eq!(format_client_history(None, &[]), "No client selected.");
    }

    #[test]
    fn test_history_without_reservations() {
        assert_eq!(
            format_client_history(Some(&alice()), &[]),
            "History for client: Alice (id=c-1)\nNo reservations found.\n"
        );
    }

    #[test]
    fn test_history_lines() {
        let lines = vec![HistoryLine {
            reservation_id: "res-1".to_string(),
            room_label: "101".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            confirmed: true,
        }];
        assert_eq!(
            format_client_history(Some(&alice()), &lines),
            "History for client: Alice (id=c-1)\n\
             Reservation res-1 - Room 101 (2024-01-01 → 2024-01-04) - Confirmed: yes\n"
        );
    }
}
