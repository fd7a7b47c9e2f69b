//! Integration tests for Cartera.
//!
//! # Running Tests
//!
//! ```bash
//! # With Postgres up and DATABASE_URL set, start the server
//! cargo run -p cartera-server &
//!
//! # Run the ignored end-to-end tests
//! cargo test -p cartera-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running server over HTTP; point them somewhere else with
//! `CARTERA_BASE_URL` (default `http://localhost:3000`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use serde_json::Value;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CARTERA_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// HTTP client for tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn http_client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Create a client via the API and return its JSON body.
///
/// # Panics
///
/// Panics if the request fails or the response is not success.
pub async fn create_test_client(client: &Client, body: &Value) -> Value {
    let resp = client
        .post(format!("{}/api/clients", base_url()))
        .json(body)
        .send()
        .await
        .expect("Failed to create test client");
    assert!(resp.status().is_success(), "create client: {}", resp.status());
    resp.json().await.expect("Failed to parse created client")
}

/// Create a supplier via the API and return its JSON body.
///
/// # Panics
///
/// Panics if the request fails or the response is not success.
pub async fn create_test_supplier(client: &Client, body: &Value) -> Value {
    let resp = client
        .post(format!("{}/api/suppliers", base_url()))
        .json(body)
        .send()
        .await
        .expect("Failed to create test supplier");
    assert!(
        resp.status().is_success(),
        "create supplier: {}",
        resp.status()
    );
    resp.json().await.expect("Failed to parse created supplier")
}

/// Best-effort cleanup of a client created by a test.
pub async fn delete_test_client(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/api/clients/{id}", base_url()))
        .send()
        .await;
}

/// Best-effort cleanup of a supplier created by a test.
pub async fn delete_test_supplier(client: &Client, id: i64) {
    let _ = client
        .delete(format!("{}/api/suppliers/{id}", base_url()))
        .send()
        .await;
}
