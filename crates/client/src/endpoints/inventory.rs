//! Inventory endpoints: paginated listing, single-item detail, and the
//! update/delete mutations.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::common::{MutationResponse, PageParams};
use crate::models::inventory::{InventoryListResponse, InventoryPage, ItemDetail, UpdateItem};

/// List one page of inventory rows.
///
/// `GET /api/inventory?page&perPage&search`. The search term travels as a
/// query parameter and is percent-encoded exactly once by reqwest.
pub async fn list_inventory(
    client: &Client,
    base_url: &str,
    params: &PageParams,
) -> Result<InventoryPage> {
    debug!(
        page = params.page,
        per_page = params.per_page,
        search = %params.search,
        "fetching inventory page"
    );
    let url = format!("{base_url}/api/inventory");
    let builder = client.get(&url).query(&params.to_query());
    let response = send_request(builder).await?;
    let resp: InventoryListResponse = response.json().await?;
    Ok(InventoryPage::from_response(resp, params.per_page))
}

/// Fetch the detail view for a single inventory record.
///
/// The server answers HTTP 200 with `{"error": ...}` when the id is
/// unknown; that is a reported failure, not a transport one.
pub async fn get_item(client: &Client, base_url: &str, id: i64) -> Result<ItemDetail> {
    let url = format!("{base_url}/api/inventory/item/{id}");
    let response = send_request(client.get(&url)).await?;
    let body: Value = response.json().await?;
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Err(ClientError::Reported {
            message: error.to_string(),
        });
    }
    serde_json::from_value(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Update quantity/location for an inventory record with an audit reason.
///
/// `PUT /api/inventory/{id}`; a 2xx `{"success": false}` maps to
/// [`ClientError::Reported`] so callers treat it as an inline message.
pub async fn update_item(
    client: &Client,
    base_url: &str,
    id: i64,
    update: &UpdateItem,
) -> Result<()> {
    debug!(id, quantity = update.quantity, "updating inventory item");
    let url = format!("{base_url}/api/inventory/{id}");
    let response = send_request(client.put(&url).json(update)).await?;
    let resp: MutationResponse = response.json().await?;
    if resp.success {
        Ok(())
    } else {
        Err(ClientError::Reported {
            message: resp.failure_message(),
        })
    }
}

/// Delete an inventory record with a mandatory audit reason.
pub async fn delete_item(client: &Client, base_url: &str, id: i64, reason: &str) -> Result<()> {
    debug!(id, "deleting inventory item");
    let url = format!("{base_url}/api/inventory/{id}");
    let body = serde_json::json!({ "reason": reason });
    let response = send_request(client.delete(&url).json(&body)).await?;
    let resp: MutationResponse = response.json().await?;
    if resp.success {
        Ok(())
    } else {
        Err(ClientError::Reported {
            message: resp.failure_message(),
        })
    }
}
