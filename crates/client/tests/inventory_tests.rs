//! Inventory endpoint tests.
//!
//! Covers the paginated listing (query parameter shape, empty pages,
//! search term encoding), the single-item detail lookup, and the
//! update/delete mutations including the success/reported/transport
//! failure taxonomy.

mod common;

use common::*;

#[tokio::test]
async fn test_list_inventory_sends_pagination_params() {
    let mock_server = MockServer::start().await;

    let fixture = serde_json::json!({
        "items": [
            {
                "id": 1,
                "item_id": 42,
                "item_name": "Iron Sword",
                "quantity": 3,
                "location": "Warehouse A",
                "stored_time": "2024-01-01 10:00:00",
                "last_updated": "2024-02-01 11:30:00"
            },
            {
                "id": 2,
                "item_id": 43,
                "item_name": null,
                "quantity": 1,
                "location": "B2"
            }
        ],
        "total": 95,
        "page": 2,
        "perPage": 10,
        "totalPages": 10
    });

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "10"))
        .and(query_param("search", "sword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_inventory(&PageParams::new(2, 10, "sword"))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 95);
    assert_eq!(page.total_pages, 10);
    assert_eq!(page.items[0].item_name.as_deref(), Some("Iron Sword"));
    assert!(page.items[1].item_name.is_none());
}

#[tokio::test]
async fn test_list_inventory_search_term_encoded_once() {
    let mock_server = MockServer::start().await;

    // wiremock matches against the decoded value, so a match here proves
    // the term was encoded exactly once on the wire.
    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .and(query_param("search", "50% off & more"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [], "total": 0})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_inventory(&PageParams::new(1, 10, "50% off & more"))
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_list_inventory_empty_page_is_ok_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [], "total": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_inventory(&PageParams::new(1, 10, ""))
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    // Still one page so the pagination bar has a valid range.
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_list_inventory_500_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            serde_json::json!({"error": "database unreachable", "code": "DB_CONNECTION_FAILED"}),
        ))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .list_inventory(&PageParams::new(1, 10, ""))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unreachable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_item_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory/item/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "inventory_id": 7,
            "item_id": 42,
            "item_name": "Iron Sword",
            "quantity": 3,
            "location": "Warehouse A"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let detail = client.get_item(7).await.unwrap();
    assert_eq!(detail.inventory_id, 7);
    assert_eq!(detail.quantity, 3);
}

#[tokio::test]
async fn test_get_item_unknown_id_is_reported() {
    let mock_server = MockServer::start().await;

    // The server answers 200 with an error field for unknown ids.
    Mock::given(method("GET"))
        .and(path("/api/inventory/item/999"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "inventory item not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_item(999).await.unwrap_err();
    assert!(err.is_reported());
    assert_eq!(err.inline_message(), "inventory item not found");
}

#[tokio::test]
async fn test_update_item_sends_body_and_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/inventory/7"))
        .and(body_json(serde_json::json!({
            "quantity": 5,
            "location": "Warehouse B",
            "reason": "recount"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": true, "message": "updated"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = gear_client::UpdateItem {
        quantity: 5,
        location: "Warehouse B".to_string(),
        reason: "recount".to_string(),
    };
    client.update_item(7, &update).await.unwrap();
}

#[tokio::test]
async fn test_update_item_success_false_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/inventory/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "message": "update failed"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = gear_client::UpdateItem {
        quantity: 5,
        location: "Warehouse B".to_string(),
        reason: "recount".to_string(),
    };
    let err = client.update_item(7, &update).await.unwrap_err();
    assert!(err.is_reported());
    assert_eq!(err.inline_message(), "update failed");
}

#[tokio::test]
async fn test_delete_item_sends_reason_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/inventory/42"))
        .and(body_json(serde_json::json!({"reason": "damaged"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "deleted"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.delete_item(42, "damaged").await.unwrap();
}

#[tokio::test]
async fn test_delete_item_failure_uses_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/inventory/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "item is locked"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.delete_item(42, "damaged").await.unwrap_err();
    assert!(err.is_reported());
    assert_eq!(err.inline_message(), "item is locked");
}
