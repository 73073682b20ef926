//! API tests against a running server
//!
//! Start the server first, then run with: cargo test -- --ignored
//! These mutate the live store, so run them against a throwaway instance.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:9000";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_object());
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "ID": 0,
            "Title": "The Rust Programming Language",
            "Author": "Klabnik and Nichols",
            "ISBN": "9781718503106",
            "Description": "The book",
            "Price": 39.99
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Title"], "The Rust Programming Language");
}

#[tokio::test]
#[ignore]
async fn test_create_book_malformed_body() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
