//! Operation log endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::common::PageParams;
use crate::models::logs::{OperationLogPage, OperationLogsResponse};

/// List one page of operation logs.
///
/// `GET /api/operation_logs?page&perPage&search`. The response carries an
/// in-band `status` field; anything other than `"success"` is mapped to
/// [`ClientError::Reported`] with the server-supplied message even though
/// the HTTP status was 2xx.
pub async fn list_operation_logs(
    client: &Client,
    base_url: &str,
    params: &PageParams,
) -> Result<OperationLogPage> {
    debug!(
        page = params.page,
        per_page = params.per_page,
        search = %params.search,
        "fetching operation log page"
    );
    let url = format!("{base_url}/api/operation_logs");
    let builder = client.get(&url).query(&params.to_query());
    let response = send_request(builder).await?;
    let resp: OperationLogsResponse = response.json().await?;

    if resp.status != "success" {
        return Err(ClientError::Reported {
            message: resp.failure_message(),
        });
    }

    // The server already guarantees totalPages >= 1, but don't rely on it.
    Ok(OperationLogPage {
        total_pages: resp.total_pages.max(1),
        total_items: resp.total_items,
        logs: resp.logs,
    })
}
