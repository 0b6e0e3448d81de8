//! Types shared across GearTracker API models.
//!
//! This module contains the pagination request parameters and the page
//! arithmetic both table endpoints rely on. It does NOT contain
//! resource-specific models.

use serde::{Deserialize, Serialize};

/// Query parameters for the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u64,
    /// Rows per page (`perPage` on the wire).
    pub per_page: u64,
    /// Search term; empty means no filter.
    pub search: String,
}

impl PageParams {
    pub fn new(page: u64, per_page: u64, search: impl Into<String>) -> Self {
        Self {
            page,
            per_page,
            search: search.into(),
        }
    }

    /// Wire representation. The search term is always sent, even when
    /// empty, matching the reference frontend; reqwest's query serializer
    /// percent-encodes it exactly once.
    pub fn to_query(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
            ("search", self.search.clone()),
        ]
    }
}

/// Total page count for a result set.
///
/// Always at least 1, even for an empty result set, so `page` has a valid
/// range to be clamped into.
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    debug_assert!(page_size > 0);
    total_items.div_ceil(page_size).max(1)
}

/// Response body for mutating endpoints (PUT/DELETE/POST).
///
/// The server reports outcome in-band: `success: false` plus a `message`
/// or `error` field on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    /// The failure text, preferring `message` over `error`.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "operation failed".to_string())
    }
}
