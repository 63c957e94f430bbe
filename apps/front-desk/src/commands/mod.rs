//! # Commands
//!
//! One module per subcommand group. Each handler calls exactly one service
//! operation (plus lookups needed to render its result) and prints it.
//!
//! ## Command Structure
//! ```text
//! front-desk <group> <action> [args]
//!     │
//!     ▼
//! dispatch() ──► rooms::run / clients::run / reservations::run / ...
//!     │
//!     ▼
//! HotelServices ──► Output (text or --json)
//! ```

pub mod billing;
pub mod clients;
pub mod reports;
pub mod reservations;
pub mod rooms;
pub mod users;

use serde::Serialize;

use hotel_service::HotelServices;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::output::Output;

/// Everything a command handler needs.
#[derive(Debug, Clone)]
pub struct Context {
    pub services: HotelServices,
    pub config: AppConfig,
    pub out: Output,
}

/// Runs one parsed command.
pub async fn dispatch(ctx: &Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Rooms(cmd) => rooms::run(ctx, cmd).await,
        Command::Clients(cmd) => clients::run(ctx, cmd).await,
        Command::Reservations(cmd) => reservations::run(ctx, cmd).await,
        Command::Billing(cmd) => billing::run(ctx, cmd).await,
        Command::Report(cmd) => reports::run(ctx, cmd).await,
        Command::Users(cmd) => users::run(ctx, cmd).await,
        Command::Status => status(ctx).await,
    }
}

#[derive(Debug, Serialize)]
struct Status {
    hotel_name: String,
    database_path: String,
    healthy: bool,
    migrations_total: usize,
    migrations_applied: usize,
}

async fn status(ctx: &Context) -> anyhow::Result<()> {
    let db = ctx.services.database();
    let (total, applied) = db.migration_status().await?;

    let status = Status {
        hotel_name: ctx.config.hotel_name.clone(),
        database_path: ctx.config.database_path.display().to_string(),
        healthy: db.health_check().await,
        migrations_total: total,
        migrations_applied: applied,
    };

    ctx.out.emit(&status, |s| {
        format!(
            "{}\nDatabase: {}\nHealthy: {}\nMigrations: {}/{} applied",
            s.hotel_name,
            s.database_path,
            if s.healthy { "yes" } else { "no" },
            s.migrations_applied,
            s.migrations_total
        )
    })
}
