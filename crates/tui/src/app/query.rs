//! Pagination and search state for a single table view.
//!
//! Responsibilities:
//! - Track the current page, page size, applied search term, and totals.
//! - Clamp page numbers against the derived page count.
//! - Report when a state change requires a refetch.
//!
//! Non-responsibilities:
//! - Issuing requests (handled by `runtime::side_effects`).
//! - Holding fetched rows (handled by `TableController`).

use gear_client::{PageParams, total_pages};
use gear_config::constants::{MAX_PAGE_SIZE, PAGE_SIZE_CHOICES};

/// Query parameters and totals for one paginated table.
///
/// `total_items` and `total_pages` reflect the most recent server response;
/// `total_pages` is always at least 1 so an empty table still renders as
/// "Page 1 of 1".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u64,
    pub page_size: u64,
    pub search: String,
    pub total_items: u64,
    pub total_pages: u64,
}

impl QueryState {
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            total_items: 0,
            total_pages: 1,
        }
    }

    /// Request parameters for the current state.
    pub fn params(&self) -> PageParams {
        PageParams::new(self.page, self.page_size, self.search.clone())
    }

    /// Move to `page`, clamped to `[1, total_pages]`.
    ///
    /// Returns true if the page actually changed (and a refetch is needed).
    pub fn set_page(&mut self, page: u64) -> bool {
        let clamped = page.clamp(1, self.total_pages);
        if clamped == self.page {
            return false;
        }
        self.page = clamped;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Change the page size and reset to the first page.
    ///
    /// The size is clamped to `[1, MAX_PAGE_SIZE]`, matching the server's
    /// own clamp. Returns true if the size changed.
    pub fn set_page_size(&mut self, size: u64) -> bool {
        let clamped = size.clamp(1, MAX_PAGE_SIZE);
        if clamped == self.page_size {
            return false;
        }
        self.page_size = clamped;
        self.page = 1;
        true
    }

    /// Step through the allowed page sizes; wraps around at either end.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let choices = PAGE_SIZE_CHOICES;
        let idx = choices
            .iter()
            .position(|&c| c == self.page_size)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % choices.len()
        } else {
            (idx + choices.len() - 1) % choices.len()
        };
        self.set_page_size(choices[next])
    }

    /// Apply a new search term and reset to the first page.
    ///
    /// Always returns true: re-applying the same term is an explicit user
    /// action and still refetches.
    pub fn apply_search(&mut self, term: &str) -> bool {
        self.search = term.trim().to_string();
        self.page = 1;
        true
    }

    /// Absorb the total item count from a completed fetch.
    ///
    /// Recomputes `total_pages` and clamps the current page against it.
    /// Returns true when the page was clamped down, meaning the rows just
    /// received belong to a page that no longer exists and a refetch of the
    /// clamped page is required.
    pub fn apply_total(&mut self, total_items: u64) -> bool {
        self.total_items = total_items;
        self.total_pages = total_pages(total_items, self.page_size);
        if self.page > self.total_pages {
            self.page = self.total_pages;
            return true;
        }
        false
    }
}
