//! # Repository Module
//!
//! Database repository implementations for the hotel front desk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Service                                                               │
//! │       │                                                                 │
//! │       │  db.reservations().book(client, room, in, out)                 │
//! │       ▼                                                                 │
//! │  ReservationRepository                                                 │
//! │  ├── book(...)      ← claim room + insert, one transaction            │
//! │  ├── cancel(id)     ← free room + delete, one transaction             │
//! │  ├── confirm(id)                                                       │
//! │  └── list_all() / get_by_id(id)                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RoomRepository`](room::RoomRepository) - Room CRUD and availability
//! - [`ClientRepository`](client::ClientRepository) - Client CRUD and lookup
//! - [`ReservationRepository`](reservation::ReservationRepository) - Booking lifecycle
//! - [`PaymentRepository`](payment::PaymentRepository) - Payments and revenue
//! - [`InvoiceRepository`](invoice::InvoiceRepository) - Invoices
//! - [`UserRepository`](user::UserRepository) - Credential store

pub mod client;
pub mod invoice;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod user;

/// Column list for `Room` with the aliases its `FromRow` derive expects.
pub(crate) const ROOM_COLUMNS: &str =
    "id, room_number AS number, type AS room_type, price_cents, available";

/// Column list for `Reservation`.
pub(crate) const RESERVATION_COLUMNS: &str =
    "id, client_id, room_id, check_in, check_out, confirmed";
