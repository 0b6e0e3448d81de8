//! Connection status and catalog endpoint tests.

mod common;

use common::*;
use gear_client::AddItemRequest;

#[tokio::test]
async fn test_connection_status_connected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/connection-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "connected",
            "message": "database connection ok"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status = client.connection_status().await.unwrap();
    assert!(status.is_connected());
}

#[tokio::test]
async fn test_connection_status_disconnected_is_data_not_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/connection-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "disconnected",
            "error": "database connection failed"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status = client.connection_status().await.unwrap();
    assert!(!status.is_connected());
    assert_eq!(status.describe(), "disconnected: database connection failed");
}

#[tokio::test]
async fn test_check_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-item"))
        .and(query_param("name", "Iron Sword"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"exists": true, "itemId": 42})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let check = client.check_item("Iron Sword").await.unwrap();
    assert!(check.exists);
    assert_eq!(check.item_id, 42);
}

#[tokio::test]
async fn test_search_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search-items"))
        .and(query_param("q", "sword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 42,
                "name": "Iron Sword",
                "category": "weapon",
                "grade": "common",
                "effect": "",
                "description": "a sword"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let items = client.search_catalog("sword").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Iron Sword");
}

#[tokio::test]
async fn test_add_item_existing_catalog_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/add-item"))
        .and(body_json(serde_json::json!({
            "isNewItem": false,
            "item": {"id": 42, "name": "Iron Sword"},
            "quantity": 2,
            "location": "A1",
            "reason": "restock"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = AddItemRequest::existing(42, "Iron Sword", 2, "A1", "restock");
    client.add_item(&request).await.unwrap();
}

#[tokio::test]
async fn test_add_item_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/add-item"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"success": false, "message": "failed to add item to stock"}),
        ))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = AddItemRequest::existing(42, "Iron Sword", 2, "A1", "restock");
    let err = client.add_item(&request).await.unwrap_err();
    assert!(err.is_reported());
}
