//! Server configuration
//!
//! All settings can be overridden via environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | /var/lib/comanda | Working directory (database, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ACCOUNT_SERVER_URL | http://localhost:3001 | External account service |
//! | TIMEZONE | UTC | Business timezone for date grouping |
//! | ENVIRONMENT | development | Runtime environment |
//! | LOG_LEVEL | info | Log level |

use chrono_tz::Tz;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// External account/restaurant service URL
    pub account_server_url: String,
    /// Business timezone — every calendar-date grouping uses this one zone
    pub timezone: Tz,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/comanda".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            account_server_url: std::env::var("ACCOUNT_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::UTC),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Production runs log to rolling files under the work dir
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
