//! Operation log resource models.

use serde::{Deserialize, Serialize};

/// One operation log row as returned by `GET /api/operation_logs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationLog {
    pub id: i64,
    /// Logged action kind, e.g. `ADD`, `UPDATE`, `DELETE`.
    pub operation_type: String,
    pub item_name: String,
    #[serde(default)]
    pub operation_note: String,
    /// Server-formatted timestamp string.
    #[serde(default)]
    pub operation_time: Option<String>,
}

/// Wire shape of `GET /api/operation_logs`.
///
/// Unlike the inventory endpoint this one carries an in-band `status`
/// field; anything other than `"success"` is a reported failure even on
/// an HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OperationLogsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub logs: Vec<OperationLog>,
    #[serde(default, rename = "totalItems")]
    pub total_items: u64,
    #[serde(default, rename = "totalPages")]
    pub total_pages: u64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One fetched page of operation logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLogPage {
    pub logs: Vec<OperationLog>,
    pub total_items: u64,
    pub total_pages: u64,
}

impl OperationLogsResponse {
    pub(crate) fn failure_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| format!("server returned status '{}'", self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_log_deserializes_server_json() {
        let json = serde_json::json!({
            "id": 1,
            "operation_type": "ADD",
            "item_name": "Widget",
            "operation_note": "restocked",
            "operation_time": "2024-01-01 10:00:00"
        });
        let log: OperationLog = serde_json::from_value(json).unwrap();
        assert_eq!(log.operation_type, "ADD");
        assert_eq!(log.operation_time.as_deref(), Some("2024-01-01 10:00:00"));
    }

    #[test]
    fn test_failure_message_falls_back_to_status() {
        let resp = OperationLogsResponse {
            status: "degraded".to_string(),
            logs: vec![],
            total_items: 0,
            total_pages: 0,
            message: None,
            error: None,
        };
        assert_eq!(resp.failure_message(), "server returned status 'degraded'");
    }
}
