//! Text and JSON rendering of command results.

use serde::Serialize;

use hotel_core::{Client, Invoice, Money, PaymentDetail, Reservation, Room, User};

use crate::config::AppConfig;

/// Where command results go: stdout, as text or as JSON.
#[derive(Debug, Clone)]
pub struct Output {
    json: bool,
    config: AppConfig,
}

impl Output {
    pub fn new(json: bool, config: AppConfig) -> Self {
        Output { json, config }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Prints `value` as pretty JSON, or `text(value)` otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let rendered = text(value);
            if !rendered.is_empty() {
                println!("{}", rendered.trim_end_matches('\n'));
            }
        }
        Ok(())
    }

    /// Prints a plain message; as `{"message": ...}` in JSON mode.
    pub fn message(&self, message: &str) -> anyhow::Result<()> {
        self.emit(&serde_json::json!({ "message": message }), |_| message.to_string())
    }

    pub fn money(&self, amount: Money) -> String {
        self.config.format_currency(amount)
    }

    // -------------------------------------------------------------------------
    // Text renderers
    // -------------------------------------------------------------------------

    pub fn room_line(&self, room: &Room) -> String {
        format!(
            "{}  {:<6} {:<10} {:>10}/night  {}",
            room.id,
            room.number.as_deref().unwrap_or("-"),
            room.room_type,
            self.money(room.price()),
            if room.available { "available" } else { "occupied" }
        )
    }

    pub fn rooms(&self, rooms: &[Room]) -> String {
        if rooms.is_empty() {
            return "No rooms.".to_string();
        }
        lines(rooms.iter().map(|room| self.room_line(room)))
    }

    pub fn client_line(&self, client: &Client) -> String {
        format!(
            "{}  {:<20} {:<25} {}",
            client.id, client.name, client.contact, client.email
        )
    }

    pub fn clients(&self, clients: &[Client]) -> String {
        if clients.is_empty() {
            return "No clients.".to_string();
        }
        lines(clients.iter().map(|client| self.client_line(client)))
    }

    pub fn reservation_line(&self, reservation: &Reservation) -> String {
        format!(
            "{}  client {}  room {}  {} → {}  {}",
            reservation.id,
            reservation.client_id,
            reservation.room_id,
            reservation.check_in,
            reservation.check_out,
            if reservation.confirmed { "confirmed" } else { "pending" }
        )
    }

    pub fn reservations(&self, reservations: &[Reservation]) -> String {
        if reservations.is_empty() {
            return "No reservations.".to_string();
        }
        lines(reservations.iter().map(|r| self.reservation_line(r)))
    }

    pub fn invoice_line(&self, invoice: &Invoice) -> String {
        format!(
            "{}  reservation {}  {}  total {}",
            invoice.id,
            invoice.reservation_id,
            invoice.date,
            self.money(invoice.total())
        )
    }

    pub fn invoices(&self, invoices: &[Invoice]) -> String {
        if invoices.is_empty() {
            return "No invoices.".to_string();
        }
        lines(invoices.iter().map(|invoice| self.invoice_line(invoice)))
    }

    pub fn payments(&self, payments: &[PaymentDetail]) -> String {
        if payments.is_empty() {
            return "No payments.".to_string();
        }
        lines(payments.iter().map(|detail| {
            format!(
                "{}  {}  {}  room {} ({} → {})  {}",
                detail.payment.id,
                detail.payment.date,
                self.money(detail.payment.amount()),
                detail.room.label(),
                detail.reservation.check_in,
                detail.reservation.check_out,
                if detail.payment.paid { "paid" } else { "unpaid" }
            )
        }))
    }

    pub fn users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users.".to_string();
        }
        lines(users.iter().map(|user| {
            format!(
                "{}  {:<20} {:?}{}",
                user.id,
                user.username,
                user.role,
                user.client_id
                    .as_deref()
                    .map(|id| format!("  client {}", id))
                    .unwrap_or_default()
            )
        }))
    }
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}
