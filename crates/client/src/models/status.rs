//! Connection status model for the header indicator.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/connection-status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionStatus {
    /// `"connected"` when the server can reach its database.
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }

    /// Text for the header widget.
    pub fn describe(&self) -> String {
        if self.is_connected() {
            "connected".to_string()
        } else {
            match &self.error {
                Some(e) => format!("disconnected: {e}"),
                None => "disconnected".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected() {
        let status: ConnectionStatus =
            serde_json::from_value(serde_json::json!({"status": "connected", "message": "ok"}))
                .unwrap();
        assert!(status.is_connected());
        assert_eq!(status.describe(), "connected");
    }

    #[test]
    fn test_disconnected_carries_error_text() {
        let status: ConnectionStatus = serde_json::from_value(
            serde_json::json!({"status": "disconnected", "error": "db unreachable"}),
        )
        .unwrap();
        assert!(!status.is_connected());
        assert_eq!(status.describe(), "disconnected: db unreachable");
    }
}
