//! Application state for the inventory TUI.
//!
//! Responsibilities:
//! - Own the per-view table controllers, popup state, search box, and
//!   connection health.
//! - Build fetch command actions, tagging them with fresh sequence numbers.
//!
//! Non-responsibilities:
//! - Async work (see `runtime::side_effects`).
//! - Rendering (see `ui`).

use gear_client::{InventoryItem, OperationLog};
use gear_config::TableDefaults;
use tui_input::Input;

use crate::action::Action;
use crate::ui::toast::Toast;

mod actions;
pub mod controller;
mod input;
pub mod popups;
pub mod query;

pub use controller::TableController;
pub use popups::{DeletePrompt, EditField, EditForm, Popup};
pub use query::QueryState;

/// Which table is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Inventory,
    Logs,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Inventory => "Inventory",
            View::Logs => "Operation Logs",
        }
    }
}

/// Health of the backend connection as last reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionHealth {
    /// No status response yet.
    Unknown,
    Connected,
    /// The server answered but reports itself unhealthy.
    Disconnected(String),
    /// The status request itself failed.
    Unreachable(String),
}

pub struct App {
    pub view: View,
    pub inventory: TableController<InventoryItem>,
    pub logs: TableController<OperationLog>,
    pub connection: ConnectionHealth,
    pub search: Input,
    pub search_active: bool,
    pub popup: Option<Popup>,
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,
    pub should_quit: bool,
    /// Follow-up commands queued by `update`, drained by the event loop.
    pending: Vec<Action>,
}

impl App {
    pub fn new(defaults: &TableDefaults) -> Self {
        Self {
            view: View::Inventory,
            inventory: TableController::new(defaults.page_size),
            logs: TableController::new(defaults.page_size),
            connection: ConnectionHealth::Unknown,
            search: Input::new(String::new()),
            search_active: false,
            popup: None,
            toasts: Vec::new(),
            spinner_frame: 0,
            should_quit: false,
            pending: Vec::new(),
        }
    }

    /// Commands to dispatch on startup: load the inventory view and probe
    /// the connection. Logs load lazily on first activation.
    pub fn startup_actions(&mut self) -> Vec<Action> {
        vec![self.reload_inventory(), Action::CheckStatus]
    }

    /// Build a fetch command for the inventory table with a fresh sequence.
    pub fn reload_inventory(&mut self) -> Action {
        let seq = self.inventory.begin_fetch();
        Action::LoadInventory {
            seq,
            params: self.inventory.query.params(),
        }
    }

    /// Build a fetch command for the operation log table with a fresh sequence.
    pub fn reload_logs(&mut self) -> Action {
        let seq = self.logs.begin_fetch();
        Action::LoadLogs {
            seq,
            params: self.logs.query.params(),
        }
    }

    pub fn reload_active(&mut self) -> Action {
        match self.view {
            View::Inventory => self.reload_inventory(),
            View::Logs => self.reload_logs(),
        }
    }

    /// Take any follow-up commands queued while handling the last action.
    pub fn drain_pending(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Applied search term of the view currently on screen.
    pub fn active_search(&self) -> &str {
        match self.view {
            View::Inventory => &self.inventory.query.search,
            View::Logs => &self.logs.query.search,
        }
    }

    pub fn active_query(&self) -> &QueryState {
        match self.view {
            View::Inventory => &self.inventory.query,
            View::Logs => &self.logs.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&TableDefaults { page_size: 10 })
    }

    #[test]
    fn startup_loads_inventory_and_checks_status() {
        let mut app = app();
        let actions = app.startup_actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::LoadInventory { seq: 1, .. }));
        assert!(matches!(actions[1], Action::CheckStatus));
        assert!(app.inventory.loading);
    }

    #[test]
    fn reload_issues_increasing_sequence_numbers() {
        let mut app = app();
        let first = app.reload_inventory();
        let second = app.reload_inventory();
        match (first, second) {
            (Action::LoadInventory { seq: a, .. }, Action::LoadInventory { seq: b, .. }) => {
                assert!(b > a);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn reload_carries_current_query_params() {
        let mut app = app();
        app.logs.query.apply_search("restock");
        app.view = View::Logs;
        match app.reload_active() {
            Action::LoadLogs { params, .. } => {
                assert_eq!(params.search, "restock");
                assert_eq!(params.page, 1);
                assert_eq!(params.per_page, 10);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
