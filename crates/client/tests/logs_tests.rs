//! Operation log endpoint tests.
//!
//! The logs endpoint differs from the inventory one in two ways: it
//! returns `totalItems`/`totalPages` directly, and it reports failures
//! in-band through a `status` field on HTTP 200.

mod common;

use common::*;

#[tokio::test]
async fn test_list_operation_logs_success() {
    let mock_server = MockServer::start().await;

    let fixture = serde_json::json!({
        "status": "success",
        "page": 1,
        "perPage": 10,
        "totalItems": 23,
        "totalPages": 3,
        "logs": [
            {
                "id": 1,
                "operation_type": "ADD",
                "item_name": "Widget",
                "operation_note": "restocked",
                "operation_time": "2024-01-01 10:00:00"
            },
            {
                "id": 2,
                "operation_type": "DELETE",
                "item_name": "Gadget",
                "operation_note": "damaged",
                "operation_time": "2024-01-02 09:15:00"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/operation_logs"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "10"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_operation_logs(&PageParams::new(1, 10, ""))
        .await
        .unwrap();

    assert_eq!(page.logs.len(), 2);
    assert_eq!(page.total_items, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.logs[0].operation_type, "ADD");
}

#[tokio::test]
async fn test_non_success_status_is_reported_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/operation_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "message": "log table unavailable",
            "logs": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .list_operation_logs(&PageParams::new(1, 10, ""))
        .await
        .unwrap_err();

    assert!(err.is_reported());
    assert_eq!(err.inline_message(), "log table unavailable");
}

#[tokio::test]
async fn test_http_500_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/operation_logs"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "database error", "code": 2003})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .list_operation_logs(&PageParams::new(1, 10, ""))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    // Transport failures render with a generic line; the server text only
    // goes to logs.
    assert_eq!(err.inline_message(), "Failed to load data, please retry");
}

#[tokio::test]
async fn test_zero_total_pages_clamped_to_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/operation_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "totalItems": 0,
            "totalPages": 0,
            "logs": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .list_operation_logs(&PageParams::new(1, 10, ""))
        .await
        .unwrap();

    assert!(page.logs.is_empty());
    assert_eq!(page.total_pages, 1);
}
