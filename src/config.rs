//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Public bind address (default: `0.0.0.0:3000`)
//! - `MAINTENANCE_LISTEN` - Maintenance bind address (default: `0.0.0.0:3001`)
//! - `STORE_PATH` - Backup file path (default: `url_store.db`)
//! - `CLEAR_INTERVAL_SECS` - Seconds between store clears (default: 30,
//!   `0` disables the periodic clear)
//! - `MAX_REHASH_ATTEMPTS` - Collision rehash bound (default: 16)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Separate listener for operational endpoints (`/backup`), kept off
    /// the public port.
    pub maintenance_addr: String,
    pub store_path: PathBuf,
    /// Seconds between full store clears. `0` disables the clear task.
    pub clear_interval_secs: u64,
    /// Upper bound on collision rehash attempts per assignment.
    pub max_rehash_attempts: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let maintenance_addr =
            env::var("MAINTENANCE_LISTEN").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let store_path = env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("url_store.db"));

        let clear_interval_secs = env::var("CLEAR_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let max_rehash_attempts = env::var("MAX_REHASH_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(16);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            maintenance_addr,
            store_path,
            clear_interval_secs,
            max_rehash_attempts,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either bind address is not `host:port`
    /// - the two listeners share an address
    /// - `MAX_REHASH_ATTEMPTS` is 0 or absurdly large
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!("LISTEN must be in format 'host:port', got '{}'", self.listen_addr);
        }

        if !self.maintenance_addr.contains(':') {
            anyhow::bail!(
                "MAINTENANCE_LISTEN must be in format 'host:port', got '{}'",
                self.maintenance_addr
            );
        }

        if self.listen_addr == self.maintenance_addr {
            anyhow::bail!(
                "LISTEN and MAINTENANCE_LISTEN must differ, both are '{}'",
                self.listen_addr
            );
        }

        if self.max_rehash_attempts == 0 || self.max_rehash_attempts > 1024 {
            anyhow::bail!(
                "MAX_REHASH_ATTEMPTS must be between 1 and 1024, got {}",
                self.max_rehash_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", self.log_format);
        }

        if self.store_path.as_os_str().is_empty() {
            anyhow::bail!("STORE_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Maintenance address: {}", self.maintenance_addr);
        tracing::info!("  Store path: {}", self.store_path.display());
        if self.clear_interval_secs == 0 {
            tracing::info!("  Periodic clear: disabled");
        } else {
            tracing::info!("  Periodic clear: every {}s", self.clear_interval_secs);
        }
        tracing::info!("  Max rehash attempts: {}", self.max_rehash_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
