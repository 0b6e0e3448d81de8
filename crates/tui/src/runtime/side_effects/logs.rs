//! Operation log fetch handler.

use std::sync::Arc;

use gear_client::PageParams;
use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;

use super::{FetchSessions, SharedClient};
use crate::action::Action;

/// Fetch one page of operation logs, superseding any fetch still in flight
/// for the log table.
pub fn handle_load_logs(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    params: PageParams,
    sessions: &mut FetchSessions,
    tracker: &TaskTracker,
) {
    if let Some(prev) = sessions.logs.take() {
        prev.abort();
    }
    let handle = tracker.spawn(async move {
        tracing::debug!(seq, page = params.page, search = %params.search, "loading operation logs");
        let result = client.list_operation_logs(&params).await.map_err(Arc::new);
        let _ = tx.send(Action::LogsLoaded { seq, result }).await;
    });
    sessions.logs = Some(handle.abort_handle());
}
