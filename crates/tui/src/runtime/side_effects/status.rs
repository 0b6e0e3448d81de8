//! Connection status probe handler.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;

use super::SharedClient;
use crate::action::Action;

/// Probe the status endpoint. Probes are cheap and never aborted; the app
/// simply keeps the most recent answer.
pub fn handle_check_status(client: SharedClient, tx: Sender<Action>, tracker: &TaskTracker) {
    tracker.spawn(async move {
        let result = client.connection_status().await.map_err(Arc::new);
        let _ = tx.send(Action::StatusLoaded(result)).await;
    });
}
