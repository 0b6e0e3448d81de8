//! Common test utilities for integration tests.
//!
//! Re-exports the types every endpoint test needs so test files can
//! `use common::*;`.

#[allow(unused_imports)]
pub use gear_client::{ClientError, GearClient, PageParams};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server.
pub fn test_client(server: &MockServer) -> GearClient {
    GearClient::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server URI is a valid base URL")
}
