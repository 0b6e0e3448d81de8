//! Per-table fetch lifecycle and row storage.
//!
//! Responsibilities:
//! - Track the in-flight request sequence number for one table.
//! - Discard completions from superseded requests.
//! - Hold the fetched rows, loading flag, inline error, and row selection.
//!
//! Invariants:
//! - Sequence numbers increase monotonically; only the most recently issued
//!   sequence is accepted.
//! - At most one request per table is considered live at a time.

use ratatui::widgets::TableState;

use super::query::QueryState;

/// State for one paginated table: query, rows, and request bookkeeping.
#[derive(Debug)]
pub struct TableController<T> {
    pub query: QueryState,
    /// None until the first fetch completes; Some([]) is a real empty page.
    pub rows: Option<Vec<T>>,
    pub loading: bool,
    /// Inline error from the last failed fetch; cleared on the next fetch.
    pub error: Option<String>,
    pub table_state: TableState,
    next_seq: u64,
    inflight: Option<u64>,
}

impl<T> TableController<T> {
    pub fn new(page_size: u64) -> Self {
        Self {
            query: QueryState::new(page_size),
            rows: None,
            loading: false,
            error: None,
            table_state: TableState::default(),
            next_seq: 0,
            inflight: None,
        }
    }

    /// Start a new fetch, superseding any outstanding one.
    ///
    /// Returns the sequence number to tag the request with. Completions
    /// carrying any other sequence are stale and must be discarded.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_seq += 1;
        self.inflight = Some(self.next_seq);
        self.loading = true;
        self.error = None;
        self.next_seq
    }

    /// Whether a completion with this sequence is still current.
    pub fn accepts(&self, seq: u64) -> bool {
        self.inflight == Some(seq)
    }

    /// Absorb a successful fetch.
    ///
    /// Returns true when the totals clamped the current page, meaning the
    /// delivered rows are for a page that no longer exists and the caller
    /// must refetch.
    pub fn apply_page(&mut self, rows: Vec<T>, total_items: u64) -> bool {
        self.inflight = None;
        self.loading = false;
        self.error = None;

        let len = rows.len();
        self.rows = Some(rows);
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0).min(len - 1);
            self.table_state.select(Some(selected));
        }

        self.query.apply_total(total_items)
    }

    /// Absorb a failed fetch. Previously fetched rows are kept but the error
    /// takes over the table body until the next successful fetch.
    pub fn apply_error(&mut self, message: String) {
        self.inflight = None;
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select_next(&mut self) {
        let Some(rows) = &self.rows else { return };
        if rows.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(rows.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        let Some(rows) = &self.rows else { return };
        if rows.is_empty() {
            return;
        }
        let prev = self.table_state.selected().unwrap_or(0).saturating_sub(1);
        self.table_state.select(Some(prev));
    }

    pub fn selected(&self) -> Option<&T> {
        let rows = self.rows.as_ref()?;
        rows.get(self.table_state.selected()?)
    }
}
