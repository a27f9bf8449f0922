/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitfinex-adapter tests

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bitfinex_adapter::{BitfinexClient, ClientConfig, Credentials};
use serde_json::Value;
use wiremock::{MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Config pointing at the mock server
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Signed client against the mock server
pub fn private_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::with_config(mock_config(server), test_credentials()).expect("client init")
}

/// Public-only client against the mock server
pub fn public_client(server: &MockServer) -> BitfinexClient {
    BitfinexClient::build(mock_config(server), None).expect("client init")
}

pub fn header_str<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .expect("ascii header")
}

/// Decode the base64 JSON carried in X-BFX-PAYLOAD
pub fn decode_payload(request: &Request) -> Value {
    let raw = BASE64
        .decode(header_str(request, "x-bfx-payload"))
        .expect("base64 payload");
    serde_json::from_slice(&raw).expect("json payload")
}

pub fn payload_keys(payload: &Value) -> Vec<String> {
    payload
        .as_object()
        .expect("object payload")
        .keys()
        .cloned()
        .collect()
}
