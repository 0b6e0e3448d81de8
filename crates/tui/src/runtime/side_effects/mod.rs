//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run API calls for fetch and mutation commands on background tasks so
//!   the event loop never blocks.
//! - Send results back over the action channel for state updates.
//! - Abort the previous page fetch for a table when a newer one is issued.
//!
//! Does NOT handle:
//! - Application state. Completions go through `App::update`, which also
//!   guards against stale results by sequence number; aborting here is an
//!   optimization that stops wasted work, not the correctness mechanism.

use std::sync::Arc;

use gear_client::GearClient;
use tokio::sync::mpsc::Sender;
use tokio::task::AbortHandle;
use tokio_util::task::TaskTracker;

use crate::action::Action;

mod inventory;
mod logs;
mod status;

/// Shared client handle for spawned tasks. All `GearClient` methods take
/// `&self`, so no lock is needed.
pub type SharedClient = Arc<GearClient>;

/// Abort handles for the single in-flight page fetch each table is allowed.
///
/// Mutations and status checks are never aborted; only page fetches are
/// superseded.
#[derive(Default)]
pub struct FetchSessions {
    pub(crate) inventory: Option<AbortHandle>,
    pub(crate) logs: Option<AbortHandle>,
}

impl FetchSessions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Dispatch a command action to its handler. Non-command actions are ignored.
pub fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    sessions: &mut FetchSessions,
    tracker: &TaskTracker,
) {
    match action {
        Action::LoadInventory { seq, params } => {
            inventory::handle_load_inventory(client, tx, seq, params, sessions, tracker);
        }
        Action::LoadLogs { seq, params } => {
            logs::handle_load_logs(client, tx, seq, params, sessions, tracker);
        }
        Action::LoadItemDetail { id } => {
            inventory::handle_load_item_detail(client, tx, id, tracker);
        }
        Action::SubmitUpdate { id, update } => {
            inventory::handle_update_item(client, tx, id, update, tracker);
        }
        Action::SubmitDelete { id, reason } => {
            inventory::handle_delete_item(client, tx, id, reason, tracker);
        }
        Action::CheckStatus => {
            status::handle_check_status(client, tx, tracker);
        }
        _ => {}
    }
}
