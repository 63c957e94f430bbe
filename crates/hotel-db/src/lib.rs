//! # hotel-db: Database Layer for the Hotel Front Desk
//!
//! This crate provides database access for the hotel front desk.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Data Flow                                  │
//! │                                                                         │
//! │  hotel-service (ReservationLedger::make)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     hotel-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ room, client,  │   │  (embedded)  │  │   │
//! │  │   │               │◄───│ reservation,   │   │              │  │   │
//! │  │   │ SqlitePool    │    │ payment,       │   │ 001_initial  │  │   │
//! │  │   │               │    │ invoice, user  │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or an isolated in-memory database in tests)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hotel_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("hotel.db")).await?;
//! let free_rooms = db.rooms().list_available().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::client::ClientRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::payment::PaymentRepository;
pub use repository::reservation::ReservationRepository;
pub use repository::room::RoomRepository;
pub use repository::user::UserRepository;
