//! # Front Desk Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HOTEL_*`, e.g. `HOTEL_DATABASE_PATH`)
//! 2. Config file (`front-desk.toml`, or the path given with `--config`)
//! 3. Defaults (this file)
//!
//! Configuration is read once at startup and never changes afterwards.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hotel_core::Money;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "front-desk.toml";

/// Front desk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file. Defaults to `hotel.db` in the platform data
    /// directory.
    pub database_path: PathBuf,

    /// Maximum pool connections.
    pub max_connections: u32,

    /// Shown in the `status` output.
    pub hotel_name: String,

    /// Prefix for amounts in text output.
    pub currency_symbol: String,

    /// Employee account created on first start.
    pub admin_username: String,
    pub admin_password: String,

    /// Insert the sample rooms and clients into an empty database.
    pub seed_sample_data: bool,
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Load(#[from] config::ConfigError),
}

impl AppConfig {
    /// Loads defaults, then the config file (if present), then `HOTEL_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let database_path = default_database_path();
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config = Config::builder()
            .set_default("database_path", database_path.to_string_lossy().into_owned())?
            .set_default("max_connections", 5)?
            .set_default("hotel_name", "Hotel Front Desk")?
            .set_default("currency_symbol", "$")?
            .set_default("admin_username", "admin")?
            .set_default("admin_password", "admin")?
            .set_default("seed_sample_data", true)?
            // An explicit --config must exist; the implicit one may not.
            .add_source(File::from(file).required(path.is_some()))
            .add_source(Environment::with_prefix("HOTEL").try_parsing(true))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }
        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("database_path".to_string()));
        }

        Ok(config)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.abs()
        )
    }
}

/// Platform data directory + `hotel.db`, or `./hotel.db` when the platform
/// has no data directory (e.g. no home directory).
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.hotel.front-desk/hotel.db`
/// - **Windows**: `%APPDATA%\hotel\front-desk\data\hotel.db`
/// - **Linux**: `~/.local/share/front-desk/hotel.db`
fn default_database_path() -> PathBuf {
    ProjectDirs::from("com", "hotel", "front-desk")
        .map(|dirs| dirs.data_dir().join("hotel.db"))
        .unwrap_or_else(|| PathBuf::from("hotel.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            database_path: PathBuf::from("hotel.db"),
            max_connections: 5,
            hotel_name: "Test Hotel".to_string(),
            currency_symbol: "$".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            seed_sample_data: false,
        }
    }

    #[test]
    fn test_format_currency() {
        let config = config();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("front-desk-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("front-desk.toml");
        std::fs::write(
            &file,
            "database_path = \"/tmp/test-hotel.db\"\nhotel_name = \"Seaside Inn\"\nseed_sample_data = false\n",
        )
        .unwrap();

        let loaded = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(loaded.database_path, PathBuf::from("/tmp/test-hotel.db"));
        assert_eq!(loaded.hotel_name, "Seaside Inn");
        assert!(!loaded.seed_sample_data);
        assert_eq!(loaded.max_connections, 5);
        assert_eq!(loaded.currency_symbol, "$");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/front-desk.toml");
        assert!(AppConfig::load(Some(missing)).is_err());
    }
}
