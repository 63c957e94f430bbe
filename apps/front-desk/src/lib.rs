//! # Front Desk Library
//!
//! Command-line front end for the hotel front desk.
//!
//! ## Module Organization
//! ```text
//! front_desk/
//! ├── lib.rs          ◄─── You are here (startup & error reporting)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── Layered configuration
//! ├── output.rs       ◄─── Text / JSON rendering
//! └── commands/
//!     ├── mod.rs      ◄─── Context + dispatch, status
//!     ├── rooms.rs
//!     ├── clients.rs
//!     ├── reservations.rs
//!     ├── billing.rs
//!     ├── reports.rs
//!     └── users.rs
//! ```
//!
//! Logs go to stderr so that `--json` output on stdout stays parseable.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

use anyhow::Context as _;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hotel_core::CoreError;
use hotel_db::{Database, DbConfig};
use hotel_service::{ErrorBody, ErrorCode, HotelError, HotelServices};

use cli::Cli;
use commands::Context;
use config::AppConfig;
use output::Output;

/// Runs one invocation of the front desk.
///
/// ## Startup Sequence
/// ```text
/// 1. Load configuration (defaults < file < HOTEL_* environment)
/// 2. Open the database, applying pending migrations
/// 3. Make sure the administrator account exists
/// 4. Seed sample rooms and clients into empty tables (if enabled)
/// 5. Dispatch the subcommand
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    debug!(?config.database_path, "Configuration loaded");

    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("could not create data directory {}", parent.display())
            })?;
        }
    }

    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.max_connections),
    )
    .await?;
    let services = HotelServices::new(db);

    services
        .credentials()
        .ensure_admin(&config.admin_username, &config.admin_password)
        .await?;

    if config.seed_sample_data {
        let seeded = services.seed_sample_data().await?;
        if seeded.rooms > 0 || seeded.clients > 0 {
            info!(rooms = seeded.rooms, clients = seeded.clients, "Sample data seeded");
        }
    }

    let ctx = Context {
        services,
        out: Output::new(cli.json, config.clone()),
        config,
    };

    let result = commands::dispatch(&ctx, cli.command).await;
    ctx.services.database().close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotel_db=trace` - Trace the database layer only
/// - Default: INFO, DEBUG for the hotel crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hotel=debug,front_desk=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Categorizes a failed command for display.
pub fn error_body(err: &anyhow::Error) -> ErrorBody {
    if let Some(err) = err.downcast_ref::<HotelError>() {
        return err.to_body();
    }
    if let Some(err) = err.downcast_ref::<CoreError>() {
        return ErrorBody {
            code: HotelError::Core(err.clone()).code(),
            message: err.to_string(),
        };
    }
    ErrorBody {
        code: ErrorCode::Internal,
        message: format!("{:#}", err),
    }
}

/// Prints a failed command to stderr, or stdout as JSON with `--json`.
pub fn report_error(err: &anyhow::Error, json: bool) {
    let body = error_body(err);
    if json {
        match serde_json::to_string_pretty(&body) {
            Ok(rendered) => println!("{}", rendered),
            Err(_) => eprintln!("error: {}", body.message),
        }
    } else {
        let code = serde_json::to_value(body.code)
            .ok()
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_else(|| "INTERNAL".to_string());
        eprintln!("error [{}]: {}", code, body.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::ValidationError;
    use hotel_db::DbError;

    #[test]
    fn test_error_body_for_service_errors() {
        let err = anyhow::Error::from(HotelError::from(CoreError::ReservationNotFound(
            "r-1".to_string(),
        )));
        let body = error_body(&err);
        assert_eq!(body.code, ErrorCode::NotFound);
        assert!(body.message.contains("r-1"));

        let err = anyhow::Error::from(HotelError::from(DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        }));
        assert_eq!(error_body(&err).code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_error_body_for_bare_core_errors() {
        let err = anyhow::Error::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(error_body(&err).code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_error_body_for_other_errors() {
        let err = anyhow::anyhow!("authentication failed");
        let body = error_body(&err);
        assert_eq!(body.code, ErrorCode::Internal);
        assert_eq!(body.message, "authentication failed");
    }
}
