//! Item catalog endpoints backing the add-item flow.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::catalog::{AddItemRequest, CatalogItem, CheckItem};
use crate::models::common::MutationResponse;

/// Check whether an item name already exists in the catalog.
pub async fn check_item(client: &Client, base_url: &str, name: &str) -> Result<CheckItem> {
    let url = format!("{base_url}/api/check-item");
    let response = send_request(client.get(&url).query(&[("name", name)])).await?;
    Ok(response.json().await?)
}

/// Search the catalog by name fragment (server caps results at 10).
pub async fn search_catalog(client: &Client, base_url: &str, query: &str) -> Result<Vec<CatalogItem>> {
    let url = format!("{base_url}/api/search-items");
    let response = send_request(client.get(&url).query(&[("q", query)])).await?;
    Ok(response.json().await?)
}

/// Add stock, optionally registering a new catalog item first.
///
/// `POST /api/add-item`; `{"success": false}` maps to
/// [`ClientError::Reported`].
pub async fn add_item(client: &Client, base_url: &str, request: &AddItemRequest) -> Result<()> {
    debug!(
        is_new_item = request.is_new_item,
        quantity = request.quantity,
        "adding inventory item"
    );
    let url = format!("{base_url}/api/add-item");
    let response = send_request(client.post(&url).json(request)).await?;
    let resp: MutationResponse = response.json().await?;
    if resp.success {
        Ok(())
    } else {
        Err(ClientError::Reported {
            message: resp.failure_message(),
        })
    }
}
