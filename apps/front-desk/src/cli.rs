//! [`Cli`] definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use hotel_core::Money;

/// Hotel front desk: rooms, clients, reservations, billing and reports.
#[derive(Debug, Parser)]
#[command(name = "front-desk", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: ./front-desk.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Room registry
    #[command(subcommand)]
    Rooms(RoomCommand),

    /// Client registry
    #[command(subcommand)]
    Clients(ClientCommand),

    /// Reservation ledger
    #[command(subcommand)]
    Reservations(ReservationCommand),

    /// Payments, invoices and revenue
    #[command(subcommand)]
    Billing(BillingCommand),

    /// Occupancy, revenue and client history reports
    #[command(subcommand)]
    Report(ReportCommand),

    /// Staff and guest accounts
    #[command(subcommand)]
    Users(UserCommand),

    /// Database health and migration state
    Status,
}

// =============================================================================
// Rooms
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// List rooms
    List {
        /// Only rooms that can be booked
        #[arg(long)]
        available: bool,
    },

    /// Register a room
    Add(NewRoomArgs),

    /// Change a room; omitted fields keep their value
    Update(UpdateRoomArgs),

    /// Remove a room
    Delete { id: String },

    /// Show one room
    Show { id: String },
}

#[derive(Debug, Args)]
pub struct NewRoomArgs {
    /// Room number, e.g. 101
    #[arg(long)]
    pub number: Option<String>,

    /// Room type, e.g. Single, Double, Suite
    #[arg(long = "type")]
    pub room_type: String,

    /// Nightly price, e.g. 80.00
    #[arg(long)]
    pub price: Money,

    /// Register the room as not bookable
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Debug, Args)]
pub struct UpdateRoomArgs {
    pub id: String,

    #[arg(long)]
    pub number: Option<String>,

    #[arg(long = "type")]
    pub room_type: Option<String>,

    #[arg(long)]
    pub price: Option<Money>,

    /// Set the availability flag directly
    #[arg(long)]
    pub available: Option<bool>,
}

// =============================================================================
// Clients
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// List clients
    List,

    /// Register a client
    Add {
        #[arg(long)]
        name: String,

        /// Phone number or address
        #[arg(long, default_value = "")]
        contact: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// Find a client by name (case-insensitive, exact)
    Find { name: String },

    /// Show a client and their reservations
    Show { id: String },
}

// =============================================================================
// Reservations
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    /// List reservations
    List,

    /// Book a room for a client
    Make {
        #[arg(long)]
        client: String,

        #[arg(long)]
        room: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,
    },

    /// Confirm a reservation
    Confirm { id: String },

    /// Cancel a reservation and free its room
    Cancel { id: String },

    /// Show one reservation
    Show { id: String },
}

// =============================================================================
// Billing
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum BillingCommand {
    /// Record a payment against a reservation
    Pay {
        reservation: String,

        /// Amount, e.g. 150.00
        #[arg(allow_negative_numbers = true)]
        amount: Money,
    },

    /// Issue an invoice for a reservation
    Invoice { reservation: String },

    /// Invoice a reservation and pay the invoiced total
    Settle { reservation: String },

    /// List invoices, optionally for one reservation
    Invoices {
        #[arg(long)]
        reservation: Option<String>,
    },

    /// List a client's payments
    Payments { client: String },

    /// Total of all payments
    Revenue,
}

// =============================================================================
// Reports
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Rooms occupied vs available
    Occupancy,

    /// Total revenue
    Revenue,

    /// A client's reservation history
    History {
        /// Client id
        #[arg(long, conflicts_with = "name")]
        client: Option<String>,

        /// Client name (case-insensitive, exact)
        #[arg(long)]
        name: Option<String>,
    },
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a guest account together with its client record
    Register {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        contact: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        username: String,

        #[arg(long, env = "HOTEL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Check a username and password
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "HOTEL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List accounts
    List,
}
