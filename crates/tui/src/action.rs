//! Action type for the TUI event loop.
//!
//! Responsibilities:
//! - Define every message that flows through the action channel: raw input,
//!   timer ticks, fetch commands, and fetch/mutation completions.
//!
//! Non-responsibilities:
//! - Handling actions (see `app::actions`).
//! - Performing async work (see `runtime::side_effects`).

use std::sync::Arc;

use crossterm::event::KeyEvent;
use gear_client::{
    ClientError, ConnectionStatus, InventoryPage, ItemDetail, OperationLogPage, PageParams,
    UpdateItem,
};

/// Messages processed by the main event loop.
///
/// `Load*` variants are commands consumed by the side effect layer; the
/// corresponding `*Loaded` variants carry the result back. Fetch completions
/// are tagged with the sequence number issued by the owning
/// `TableController` so stale responses can be discarded.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key event from the terminal, resolved to an action by the app.
    Input(KeyEvent),
    /// UI timer tick: spinner animation and toast expiry.
    Tick,
    Quit,

    // Fetch commands.
    LoadInventory { seq: u64, params: PageParams },
    LoadLogs { seq: u64, params: PageParams },
    LoadItemDetail { id: i64 },
    CheckStatus,

    // Mutation commands.
    SubmitUpdate { id: i64, update: UpdateItem },
    SubmitDelete { id: i64, reason: String },

    // Completions.
    InventoryLoaded {
        seq: u64,
        result: Result<InventoryPage, Arc<ClientError>>,
    },
    LogsLoaded {
        seq: u64,
        result: Result<OperationLogPage, Arc<ClientError>>,
    },
    ItemDetailLoaded(Result<ItemDetail, Arc<ClientError>>),
    StatusLoaded(Result<ConnectionStatus, Arc<ClientError>>),
    ItemUpdated(Result<(), Arc<ClientError>>),
    ItemDeleted(Result<(), Arc<ClientError>>),
}
