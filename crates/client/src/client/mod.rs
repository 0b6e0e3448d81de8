//! The GearTracker API client and its methods.
//!
//! [`GearClient`] is a thin facade over the [`crate::endpoints`] free
//! functions: it owns the `reqwest::Client` and the normalized base URL
//! and delegates each call. There is no authentication or session state;
//! the GearTracker server is an unauthenticated admin backend.

pub mod builder;

use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AddItemRequest, CatalogItem, CheckItem, ConnectionStatus, InventoryPage, ItemDetail,
    OperationLogPage, PageParams, UpdateItem,
};

/// GearTracker HTTP API client.
///
/// Create one via [`GearClient::builder()`]:
///
/// ```rust,no_run
/// use gear_client::GearClient;
///
/// # fn main() -> gear_client::Result<()> {
/// let client = GearClient::builder()
///     .base_url("http://localhost:8080")
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// The client is cheap to clone (`reqwest::Client` is an `Arc`
/// internally) and all methods take `&self`, so a single instance can be
/// shared across spawned tasks without locking.
#[derive(Debug, Clone)]
pub struct GearClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl GearClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GearClientBuilder {
        builder::GearClientBuilder::new()
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List one page of inventory rows.
    pub async fn list_inventory(&self, params: &PageParams) -> Result<InventoryPage> {
        endpoints::list_inventory(&self.http, &self.base_url, params).await
    }

    /// Fetch the detail view of a single inventory record.
    pub async fn get_item(&self, id: i64) -> Result<ItemDetail> {
        endpoints::get_item(&self.http, &self.base_url, id).await
    }

    /// Update quantity/location for an inventory record.
    pub async fn update_item(&self, id: i64, update: &UpdateItem) -> Result<()> {
        endpoints::update_item(&self.http, &self.base_url, id, update).await
    }

    /// Delete an inventory record with an audit reason.
    pub async fn delete_item(&self, id: i64, reason: &str) -> Result<()> {
        endpoints::delete_item(&self.http, &self.base_url, id, reason).await
    }

    /// List one page of operation logs.
    pub async fn list_operation_logs(&self, params: &PageParams) -> Result<OperationLogPage> {
        endpoints::list_operation_logs(&self.http, &self.base_url, params).await
    }

    /// Probe server/database connectivity.
    pub async fn connection_status(&self) -> Result<ConnectionStatus> {
        endpoints::connection_status(&self.http, &self.base_url).await
    }

    /// Check whether an item name exists in the catalog.
    pub async fn check_item(&self, name: &str) -> Result<CheckItem> {
        endpoints::check_item(&self.http, &self.base_url, name).await
    }

    /// Search the catalog by name fragment.
    pub async fn search_catalog(&self, query: &str) -> Result<Vec<CatalogItem>> {
        endpoints::search_catalog(&self.http, &self.base_url, query).await
    }

    /// Add stock, optionally registering a new catalog item first.
    pub async fn add_item(&self, request: &AddItemRequest) -> Result<()> {
        endpoints::add_item(&self.http, &self.base_url, request).await
    }
}
