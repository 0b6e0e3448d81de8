//! Inventory fetch and mutation handlers.

use std::sync::Arc;

use gear_client::{PageParams, UpdateItem};
use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;

use super::{FetchSessions, SharedClient};
use crate::action::Action;

/// Fetch one inventory page, aborting any fetch still in flight for this
/// table. The completion carries `seq` so the app can discard it if an even
/// newer fetch was issued meanwhile.
pub fn handle_load_inventory(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    params: PageParams,
    sessions: &mut FetchSessions,
    tracker: &TaskTracker,
) {
    if let Some(prev) = sessions.inventory.take() {
        prev.abort();
    }
    let handle = tracker.spawn(async move {
        tracing::debug!(seq, page = params.page, search = %params.search, "loading inventory");
        let result = client.list_inventory(&params).await.map_err(Arc::new);
        // A closed channel means shutdown; drop the result.
        let _ = tx.send(Action::InventoryLoaded { seq, result }).await;
    });
    sessions.inventory = Some(handle.abort_handle());
}

pub fn handle_load_item_detail(
    client: SharedClient,
    tx: Sender<Action>,
    id: i64,
    tracker: &TaskTracker,
) {
    tracker.spawn(async move {
        let result = client.get_item(id).await.map_err(Arc::new);
        let _ = tx.send(Action::ItemDetailLoaded(result)).await;
    });
}

pub fn handle_update_item(
    client: SharedClient,
    tx: Sender<Action>,
    id: i64,
    update: UpdateItem,
    tracker: &TaskTracker,
) {
    tracker.spawn(async move {
        tracing::info!(id, quantity = update.quantity, "updating item");
        let result = client.update_item(id, &update).await.map_err(Arc::new);
        let _ = tx.send(Action::ItemUpdated(result)).await;
    });
}

pub fn handle_delete_item(
    client: SharedClient,
    tx: Sender<Action>,
    id: i64,
    reason: String,
    tracker: &TaskTracker,
) {
    tracker.spawn(async move {
        tracing::info!(id, "deleting item");
        let result = client.delete_item(id, &reason).await.map_err(Arc::new);
        let _ = tx.send(Action::ItemDeleted(result)).await;
    });
}
