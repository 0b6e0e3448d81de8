//! Configuration types for the GearTracker TUI.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeout) and table defaults.
//! - Provide sanitization that enforces invariants on loaded values.
//!
//! Does NOT handle:
//! - Loading from env/.env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` carries no trailing slash after sanitization.
//! - `page_size` stays within `[1, MAX_PAGE_SIZE]` (the server clamps
//!   `perPage` to 100; keeping the client in range avoids silent mismatch
//!   between requested and effective page size).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_STATUS_POLL_SECS, DEFAULT_TIMEOUT_SECS,
    MAX_PAGE_SIZE, MAX_STATUS_POLL_SECS, MAX_TIMEOUT_SECS,
};

/// Connection settings for the GearTracker web server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the GearTracker server (e.g. http://localhost:8080).
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection-status polling interval in seconds.
    pub status_poll_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            status_poll_secs: DEFAULT_STATUS_POLL_SECS,
        }
    }
}

impl ConnectionConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Status poll interval as a [`Duration`].
    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs)
    }
}

/// Defaults applied to both paginated tables on startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableDefaults {
    /// Rows requested per page.
    pub page_size: u64,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub tables: TableDefaults,
}

impl Config {
    /// Enforce invariants on loaded values, replacing out-of-range fields
    /// with safe ones. Sanitization never fails; invalid input degrades to
    /// defaults so the UI can always start.
    pub fn sanitize(mut self) -> Self {
        self.connection.base_url = normalize_base_url(&self.connection.base_url);
        if self.connection.timeout_secs == 0 || self.connection.timeout_secs > MAX_TIMEOUT_SECS {
            self.connection.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        if self.connection.status_poll_secs == 0
            || self.connection.status_poll_secs > MAX_STATUS_POLL_SECS
        {
            self.connection.status_poll_secs = DEFAULT_STATUS_POLL_SECS;
        }
        self.tables.page_size = self.tables.page_size.clamp(1, MAX_PAGE_SIZE);
        if self.tables.page_size == 1 && TableDefaults::default().page_size != 1 {
            // A zero from the environment clamps to 1, which is almost
            // certainly a typo rather than intent.
            tracing::warn!("page size sanitized to 1; check GEAR_PAGE_SIZE");
        }
        self
    }
}

/// Strip trailing slashes so endpoint paths can be joined with a plain
/// `format!("{base}{path}")`, matching how the client builds URLs.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("  http://host//  "),
            "  http://host".trim()
        );
    }

    #[test]
    fn test_sanitize_clamps_page_size() {
        let mut config = Config::default();
        config.tables.page_size = 5000;
        assert_eq!(config.sanitize().tables.page_size, MAX_PAGE_SIZE);

        let mut config = Config::default();
        config.tables.page_size = 0;
        assert_eq!(config.sanitize().tables.page_size, 1);
    }

    #[test]
    fn test_sanitize_restores_default_timeout() {
        let mut config = Config::default();
        config.connection.timeout_secs = 0;
        assert_eq!(
            config.sanitize().connection.timeout_secs,
            DEFAULT_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_default_config_is_already_sane() {
        let config = Config::default();
        assert_eq!(config.clone().sanitize(), config);
    }
}
