//! # hotel-core: Pure Business Logic for the Hotel Front Desk
//!
//! This crate contains the domain model and every calculation the front desk
//! performs, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Hotel Front Desk Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 front-desk (command line)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   hotel-service: Ledger, Billing, Reporting, Credentials        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  billing  │  │ validation│  │   │
//! │  │   │ Room      │  │   Money   │  │  nights   │  │   rules   │  │   │
//! │  │   │ Reserv.   │  │           │  │  totals   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │  report   │                            │   │
//! │  │                        └───────────┘                            │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hotel-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Room, Client, Reservation, Payment, Invoice, User)
//! - [`money`] - Money type with integer arithmetic
//! - [`billing`] - Stay length and invoice totals
//! - [`report`] - Occupancy, revenue and client-history rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hotel_core::billing::invoice_total;
//! use hotel_core::Money;
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! // Same-day stays are billed as one night
//! let total = invoice_total(check_in, check_out, Money::from_cents(8000)).unwrap();
//! assert_eq!(total.cents(), 8000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stays shorter than this (same-day or inverted ranges) are billed at this many nights.
pub const MIN_BILLABLE_NIGHTS: i64 = 1;

/// Maximum length of a client name.
pub const MAX_NAME_LEN: usize = 200;

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 4;
