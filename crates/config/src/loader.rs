//! Configuration loading from environment variables and `.env` files.
//!
//! Responsibilities:
//! - Read `GEAR_*` environment variables and apply them over defaults.
//! - Load a `.env` file from the working directory when present.
//! - Validate values that cannot be silently sanitized (URLs, numbers).
//!
//! Does NOT handle:
//! - CLI argument precedence (the tui crate applies CLI overrides on top).
//! - Persisting configuration back to disk.
//!
//! Invariants:
//! - Precedence: environment variables > `.env` file > defaults.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - The returned [`Config`] is already sanitized.

use url::Url;

use crate::error::ConfigError;
use crate::types::Config;

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. The value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Load a `.env` file if one exists. Missing files are fine; malformed
/// files are reported so a typo does not silently drop configuration.
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded .env from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::InvalidValue {
            var: ".env".to_string(),
            message: e.to_string(),
        }),
    }
}

/// Build the application configuration from defaults plus `GEAR_*`
/// environment variable overrides.
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(base_url) = env_var_or_none("GEAR_BASE_URL") {
        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                message: "scheme must be http or https".to_string(),
            });
        }
        config.connection.base_url = base_url;
    }

    if let Some(timeout) = env_var_or_none("GEAR_TIMEOUT_SECS") {
        config.connection.timeout_secs =
            timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "GEAR_TIMEOUT_SECS".to_string(),
                message: "must be a positive integer".to_string(),
            })?;
    }

    if let Some(poll) = env_var_or_none("GEAR_STATUS_POLL_SECS") {
        config.connection.status_poll_secs =
            poll.parse().map_err(|_| ConfigError::InvalidValue {
                var: "GEAR_STATUS_POLL_SECS".to_string(),
                message: "must be a positive integer".to_string(),
            })?;
    }

    if let Some(page_size) = env_var_or_none("GEAR_PAGE_SIZE") {
        config.tables.page_size = page_size.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GEAR_PAGE_SIZE".to_string(),
            message: "must be a positive integer".to_string(),
        })?;
    }

    Ok(config.sanitize())
}
