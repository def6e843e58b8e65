//! Integration tests for admin catalog management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p fraiche-admin) with
//!   `ADMIN_PASSWORD_HASH` set to the hash of `ADMIN_TEST_PASSWORD`
//!
//! Run with: cargo test -p fraiche-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use fraiche_integration_tests::{admin_base_url, admin_password, session_client};

/// Log in and return a client holding the admin session cookie.
async fn authenticated_client() -> Client {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "password": admin_password() }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    client
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_routes_reject_unauthenticated_requests() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to call products");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_login_rejects_wrong_password() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "password": "definitely-wrong" }))
        .send()
        .await
        .expect("Failed to call login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_product_crud_round_trip() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    // A category to hang the product on
    let category: Value = client
        .post(format!("{base_url}/categories"))
        .json(&json!({ "name": "Test Paniers" }))
        .send()
        .await
        .expect("Failed to create category")
        .json()
        .await
        .expect("Failed to parse category");
    let category_id = category["id"].as_i64().expect("category id");

    // Create with two variants, none flagged default: the first becomes it
    let created: Value = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "name": "Panier Dégustation",
            "description": "Assortiment de saison",
            "category_id": category_id,
            "stock": 5,
            "prices": [
                { "label": "Petit", "price": 15.0 },
                { "label": "Grand", "price": 25.0 },
            ],
        }))
        .send()
        .await
        .expect("Failed to create product")
        .json()
        .await
        .expect("Failed to parse product");

    let product_id = created["id"].as_i64().expect("product id");
    assert_eq!(created["prices"][0]["is_default"], true);
    assert_eq!(created["prices"][1]["is_default"], false);

    // Update replaces the variant list wholesale
    let updated: Value = client
        .put(format!("{base_url}/products/{product_id}"))
        .json(&json!({
            "name": "Panier Dégustation",
            "category_id": category_id,
            "stock": 5,
            "prices": [
                { "label": "Unique", "price": 20.0, "is_default": true },
            ],
        }))
        .send()
        .await
        .expect("Failed to update product")
        .json()
        .await
        .expect("Failed to parse product");

    assert_eq!(updated["prices"].as_array().map(Vec::len), Some(1));
    assert_eq!(updated["prices"][0]["label"], "Unique");

    // Delete, then a fetch must 404
    let resp = client
        .delete(format!("{base_url}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to fetch product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Cleanup
    let _ = client
        .delete(format!("{base_url}/categories/{category_id}"))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_product_without_prices_is_rejected() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "name": "Sans Prix",
            "category_id": 1,
            "prices": [],
        }))
        .send()
        .await
        .expect("Failed to call create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_settings_accept_camel_case_payloads() {
    let client = authenticated_client().await;
    let base_url = admin_base_url();

    // Legacy admin frontends still send camelCase; the boundary normalizes
    let stored: Value = client
        .put(format!("{base_url}/settings"))
        .json(&json!({
            "shopTitle": "CALIWHITE",
            "backgroundOpacity": 35,
            "whatsappNumber": "33612345678",
        }))
        .send()
        .await
        .expect("Failed to update settings")
        .json()
        .await
        .expect("Failed to parse settings");

    assert_eq!(stored["shop_name"], "CALIWHITE");
    assert_eq!(stored["background_opacity"], 35);
    assert_eq!(stored["whatsapp_number"], "33612345678");

    // The stored shape is canonical snake_case only
    let fetched: Value = client
        .get(format!("{base_url}/settings"))
        .send()
        .await
        .expect("Failed to fetch settings")
        .json()
        .await
        .expect("Failed to parse settings");

    assert!(fetched.get("shopTitle").is_none());
    assert_eq!(fetched["shop_name"], "CALIWHITE");
}
