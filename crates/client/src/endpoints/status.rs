//! Connection status endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::status::ConnectionStatus;

/// Probe the server's database connectivity.
///
/// `GET /api/connection-status`. The server reports both outcomes with
/// HTTP 200; disconnection is data, not an error.
pub async fn connection_status(client: &Client, base_url: &str) -> Result<ConnectionStatus> {
    let url = format!("{base_url}/api/connection-status");
    let response = send_request(client.get(&url)).await?;
    Ok(response.json().await?)
}
