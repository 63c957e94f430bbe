//! # Domain Types
//!
//! Core domain types used throughout the hotel front desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Room       │   │   Reservation   │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──│  room_id (FK)   │   │  id (UUID)      │       │
//! │  │  number (label) │   │  client_id (FK) │──►│  name           │       │
//! │  │  price_cents    │   │  check_in/out   │   │  contact, email │       │
//! │  │  available      │   │  confirmed      │   └─────────────────┘       │
//! │  └─────────────────┘   └────────┬────────┘                             │
//! │                                 │                                       │
//! │                  ┌──────────────┴──────────────┐                        │
//! │                  ▼                             ▼                        │
//! │         ┌─────────────────┐           ┌─────────────────┐              │
//! │         │     Payment     │           │     Invoice     │              │
//! │         │  amount_cents   │           │  total_cents    │              │
//! │         │  date, paid     │           │  date           │              │
//! │         └─────────────────┘           └─────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business label where one exists (room number, username)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::billing;
use crate::money::Money;

// =============================================================================
// Room
// =============================================================================

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Room {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label such as "101". Optional.
    pub number: Option<String>,

    /// Free-form category: "Single", "Double", "Suite", ...
    pub room_type: String,

    /// Nightly price in cents.
    pub price_cents: i64,

    /// False while an active reservation holds the room.
    pub available: bool,
}

impl Room {
    /// Returns the nightly price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Label shown in listings: the room number, or the id when unnumbered.
    pub fn label(&self) -> &str {
        self.number.as_deref().unwrap_or(&self.id)
    }
}

/// Input for registering a room. The identifier is assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRoom {
    pub number: Option<String>,
    pub room_type: String,
    pub price_cents: i64,
    pub available: bool,
}

impl NewRoom {
    /// A room that is bookable as soon as it is registered.
    pub fn new(number: impl Into<String>, room_type: impl Into<String>, price: Money) -> Self {
        NewRoom {
            number: Some(number.into()),
            room_type: room_type.into(),
            price_cents: price.cents(),
            available: true,
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// A hotel guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Phone number or postal address.
    pub contact: String,
    pub email: String,
}

/// Input for registering a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub contact: String,
    pub email: String,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        NewClient {
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// Lifecycle state of a reservation that still exists.
///
/// Cancellation removes the record, so there is no `Cancelled` variant, and a
/// confirmed reservation stays confirmed after its check-out date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Just created, awaiting confirmation.
    Pending,
    /// Confirmed by an operator.
    Confirmed,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Pending
    }
}

/// A booking of one room by one client over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: String,
    pub client_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub confirmed: bool,
}

impl Reservation {
    pub fn status(&self) -> ReservationStatus {
        if self.confirmed {
            ReservationStatus::Confirmed
        } else {
            ReservationStatus::Pending
        }
    }

    /// Nights that will be charged for this stay (never less than one).
    pub fn billable_nights(&self) -> i64 {
        billing::billable_nights(self.check_in, self.check_out)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment recorded against a reservation.
///
/// Payments are immutable once written. The amount is not reconciled against
/// any invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: String,
    pub client_id: String,
    pub reservation_id: String,
    /// Amount paid in cents.
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub paid: bool,
}

impl Payment {
    /// Returns the payment amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// A payment together with the reservation, room and client it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetail {
    pub payment: Payment,
    pub reservation: Reservation,
    pub room: Room,
    pub client: Client,
}

// =============================================================================
// Invoice
// =============================================================================

/// A bill for a reservation: billable nights × nightly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: String,
    pub reservation_id: String,
    pub date: NaiveDate,
    pub total_cents: i64,
}

impl Invoice {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Users
// =============================================================================

/// What a logged-in user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Front desk staff: full access.
    Employee,
    /// A guest with a self-service account, linked to a client record.
    Client,
}

/// An account in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: String,
    pub username: String,
    /// Argon2 PHC string. Never the plaintext password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// Set for `Role::Client` accounts.
    pub client_id: Option<String>,
}

/// Input for a guest creating their own account.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClientAccount {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
