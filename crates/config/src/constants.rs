//! Centralized constants for the GearTracker TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default GearTracker web server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default connection-status polling interval in seconds.
pub const DEFAULT_STATUS_POLL_SECS: u64 = 30;

/// Maximum allowed connection-status polling interval in seconds.
pub const MAX_STATUS_POLL_SECS: u64 = 3600;

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Default page size for inventory and operation-log tables.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum page size accepted by the server (`perPage` is clamped to 100).
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page-size choices the UI cycles through.
pub const PAGE_SIZE_CHOICES: [u64; 4] = [10, 25, 50, 100];

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;
