//! Inventory resource models.
//!
//! Field names mirror the server JSON (`snake_case` already on the wire),
//! so no rename attributes are needed except where the server is
//! inconsistent (`perPage`, `totalPages`).

use serde::{Deserialize, Serialize};

use crate::models::common::total_pages;

/// One inventory row as returned by `GET /api/inventory`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    /// Inventory record id (distinct from the catalog item id).
    pub id: i64,
    /// Catalog item id this stock entry refers to.
    pub item_id: i64,
    /// Display name; the server omits it for orphaned stock entries.
    #[serde(default)]
    pub item_name: Option<String>,
    pub quantity: i64,
    pub location: String,
    /// Raw server timestamp; formatting is a presentation concern.
    #[serde(default)]
    pub stored_time: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Wire shape of `GET /api/inventory`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InventoryListResponse {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub total: u64,
}

/// One fetched page of inventory rows plus derived pagination totals.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryPage {
    pub items: Vec<InventoryItem>,
    pub total_items: u64,
    pub total_pages: u64,
}

impl InventoryPage {
    pub(crate) fn from_response(resp: InventoryListResponse, per_page: u64) -> Self {
        // The client derives total_pages itself rather than trusting the
        // server's figure; the reference frontend does the same and the
        // server's value disagrees with it for total = 0.
        let total_pages = total_pages(resp.total, per_page);
        Self {
            items: resp.items,
            total_items: resp.total,
            total_pages,
        }
    }
}

/// Detail view from `GET /api/inventory/item/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDetail {
    pub inventory_id: i64,
    pub item_id: i64,
    #[serde(default)]
    pub item_name: Option<String>,
    pub quantity: i64,
    pub location: String,
}

/// Body of `PUT /api/inventory/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpdateItem {
    pub quantity: i64,
    pub location: String,
    pub reason: String,
}
