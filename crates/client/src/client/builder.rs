//! Client builder for constructing [`GearClient`] instances.
//!
//! Responsibilities:
//! - Fluent configuration (base URL, timeout).
//! - Validating and normalizing the base URL (no trailing slash).
//! - Constructing the underlying `reqwest::Client`.
//!
//! Invariants:
//! - `base_url` is required; `build()` fails without it.
//! - The stored base URL never ends with `/`, so endpoint paths can be
//!   appended with a plain format string.

use std::time::Duration;

use gear_config::{Config, constants::DEFAULT_TIMEOUT_SECS, normalize_base_url};

use crate::client::GearClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`GearClient`].
pub struct GearClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for GearClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GearClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the GearTracker server, including scheme and
    /// port, e.g. `http://localhost:8080`. Trailing slashes are removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Defaults to the config crate's
    /// `DEFAULT_TIMEOUT_SECS`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate the builder from a loaded [`Config`].
    pub fn from_config(self, config: &Config) -> Self {
        self.base_url(config.connection.base_url.clone())
            .timeout(config.connection.timeout())
    }

    /// Build the client.
    pub fn build(self) -> Result<GearClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?;
        let base_url = normalize_base_url(&base_url);
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(GearClient { http, base_url })
    }
}
