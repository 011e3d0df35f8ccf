//! Configuration module for the Aria backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file backing the local key-value storage
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Instant the mock dataset's relative dates are computed from
    pub seed_anchor: DateTime<Utc>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let db_path = env::var("ARIA_DB_PATH")
            .unwrap_or_else(|_| "./data/aria.sqlite".to_string())
            .into();

        let bind_addr = env::var("ARIA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| format!("Invalid ARIA_BIND_ADDR format: {}", e))?;

        let log_level = env::var("ARIA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_anchor = match env::var("ARIA_SEED_ANCHOR") {
            Ok(raw) => DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| format!("Invalid ARIA_SEED_ANCHOR (expected RFC 3339): {}", e))?,
            Err(_) => start_of_today(),
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_anchor,
        })
    }
}

/// Midnight UTC of the current day, so the seed stays stable across restarts within a day.
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("ARIA_DB_PATH");
        env::remove_var("ARIA_BIND_ADDR");
        env::remove_var("ARIA_LOG_LEVEL");
        env::remove_var("ARIA_SEED_ANCHOR");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/aria.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seed_anchor.hour(), 0);
        assert_eq!(config.seed_anchor.minute(), 0);
    }

    #[test]
    fn test_start_of_today_is_midnight() {
        let anchor = start_of_today();
        assert_eq!(anchor.num_seconds_from_midnight(), 0);
        assert!(anchor <= Utc::now());
    }
}
