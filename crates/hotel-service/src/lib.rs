//! # hotel-service: Front Desk Operations
//!
//! The operations an operator performs, composed over the pure rules in
//! `hotel-core` and the repositories in `hotel-db`.
//!
//! ## Components
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          HotelServices                                  │
//! │                                                                         │
//! │  rooms()        RoomRegistry       add / update / delete / list         │
//! │  clients()      ClientRegistry     add / find / reservations_of         │
//! │  ledger()       ReservationLedger  make / confirm / cancel              │
//! │  billing()      BillingEngine      payments / invoices / revenue        │
//! │  reporting()    Reporting          occupancy / revenue / history        │
//! │  credentials()  CredentialStore    register / authenticate              │
//! │                                                                         │
//! │  Every component holds a clone of the same `Database` (pool handle).   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let services = HotelServices::new(Database::new(DbConfig::new("hotel.db")).await?);
//!
//! if let Some(reservation) = services.ledger().make(&client_id, &room_id, check_in, check_out).await? {
//!     services.ledger().confirm(&reservation.id).await?;
//! }
//! println!("{}", services.reporting().occupancy_report().await?);
//! ```

pub mod auth;
pub mod billing;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod reporting;
pub mod sample;

pub use auth::CredentialStore;
pub use billing::BillingEngine;
pub use error::{ErrorBody, ErrorCode, HotelError, HotelResult};
pub use ledger::ReservationLedger;
pub use registry::{ClientRegistry, RoomRegistry};
pub use reporting::Reporting;
pub use sample::{seed_sample_data, SeedOutcome};

use hotel_db::Database;

/// Entry point to every front desk component.
#[derive(Debug, Clone)]
pub struct HotelServices {
    db: Database,
}

impl HotelServices {
    pub fn new(db: Database) -> Self {
        HotelServices { db }
    }

    pub fn rooms(&self) -> RoomRegistry {
        RoomRegistry::new(self.db.clone())
    }

    pub fn clients(&self) -> ClientRegistry {
        ClientRegistry::new(self.db.clone())
    }

    pub fn ledger(&self) -> ReservationLedger {
        ReservationLedger::new(self.db.clone())
    }

    pub fn billing(&self) -> BillingEngine {
        BillingEngine::new(self.db.clone())
    }

    pub fn reporting(&self) -> Reporting {
        Reporting::new(self.db.clone())
    }

    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(self.db.clone())
    }

    /// Seeds sample rooms and clients into empty tables.
    pub async fn seed_sample_data(&self) -> HotelResult<SeedOutcome> {
        sample::seed_sample_data(&self.db).await
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
