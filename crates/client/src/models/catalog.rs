//! Item catalog models backing the add-item flow.
//!
//! The catalog (`item_list` on the server) is the master list of known
//! items; inventory rows reference it by id.

use serde::{Deserialize, Serialize};

/// One catalog entry from `GET /api/search-items?q=`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /api/check-item?name=`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CheckItem {
    pub exists: bool,
    /// Catalog id when the item exists; the server sends -1 otherwise.
    #[serde(rename = "itemId")]
    pub item_id: i64,
}

/// Catalog fields for a brand-new item in an add request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCatalogItem {
    pub name: String,
    pub category: String,
    pub grade: String,
    pub effect: String,
    pub description: String,
    pub note: String,
}

/// Body of `POST /api/add-item`.
///
/// `item` is either `{"id": ...}` referencing an existing catalog entry or
/// the full [`NewCatalogItem`] field set when `is_new_item` is true.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddItemRequest {
    #[serde(rename = "isNewItem")]
    pub is_new_item: bool,
    pub item: serde_json::Value,
    pub quantity: i64,
    pub location: String,
    pub reason: String,
}

impl AddItemRequest {
    /// Add stock for an item already present in the catalog.
    pub fn existing(item_id: i64, name: &str, quantity: i64, location: &str, reason: &str) -> Self {
        Self {
            is_new_item: false,
            item: serde_json::json!({ "id": item_id, "name": name }),
            quantity,
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Register a new catalog item and add stock for it in one call.
    pub fn new_item(item: NewCatalogItem, quantity: i64, location: &str, reason: &str) -> Self {
        Self {
            is_new_item: true,
            item: serde_json::to_value(item).expect("NewCatalogItem serializes"),
            quantity,
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_item_uses_camel_case_id() {
        let check: CheckItem =
            serde_json::from_value(serde_json::json!({"exists": true, "itemId": 9})).unwrap();
        assert!(check.exists);
        assert_eq!(check.item_id, 9);
    }

    #[test]
    fn test_add_item_request_wire_shape() {
        let req = AddItemRequest::existing(5, "Iron Sword", 2, "A1", "restock");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["isNewItem"], serde_json::json!(false));
        assert_eq!(value["item"]["id"], serde_json::json!(5));
        assert_eq!(value["reason"], serde_json::json!("restock"));
    }
}
