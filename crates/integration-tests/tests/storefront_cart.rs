//! Integration tests for the storefront cart flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A seeded catalog (`fraiche-cli seed --file crates/cli/seeds/boutique.yaml --reset`)
//! - The storefront server running (cargo run -p fraiche-storefront)
//!
//! Run with: cargo test -p fraiche-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use fraiche_core::cart::EMPTY_CART_MESSAGE;
use fraiche_integration_tests::{session_client, storefront_base_url};

/// Fetch the first seeded product and its default variant IDs.
async fn first_product(client: &reqwest::Client) -> (i64, i64) {
    let base_url = storefront_base_url();
    let products: Value = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse products");

    let product = products
        .as_array()
        .and_then(|list| list.first())
        .expect("Catalog is empty; seed the database first");
    let product_id = product["id"].as_i64().expect("product id");
    let variant_id = product["prices"][0]["id"].as_i64().expect("variant id");
    (product_id, variant_id)
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_cart_add_merges_quantities() {
    let client = session_client();
    let base_url = storefront_base_url();
    let (product_id, variant_id) = first_product(&client).await;

    let body = serde_json::json!({
        "product_id": product_id,
        "variant_id": variant_id,
        "quantity": 2,
    });

    // Add twice; the same line must merge, not duplicate
    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/cart/items"))
            .json(&body)
            .send()
            .await
            .expect("Failed to add to cart");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let cart: Value = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");

    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["item_count"], 4);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_cart_update_zero_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();
    let (product_id, variant_id) = first_product(&client).await;

    client
        .post(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": product_id,
            "variant_id": variant_id,
        }))
        .send()
        .await
        .expect("Failed to add to cart");

    let cart: Value = client
        .patch(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": product_id,
            "variant_id": variant_id,
            "quantity": 0,
        }))
        .send()
        .await
        .expect("Failed to update cart")
        .json()
        .await
        .expect("Failed to parse cart");

    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(0));
    assert_eq!(cart["item_count"], 0);
    assert_eq!(cart["total"], "0");
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_cart_update_negative_quantity_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();
    let (product_id, variant_id) = first_product(&client).await;

    client
        .post(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": product_id,
            "variant_id": variant_id,
            "quantity": 2,
        }))
        .send()
        .await
        .expect("Failed to add to cart");

    // Legacy clients send negatives; they behave exactly like zero
    let cart: Value = client
        .patch(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": product_id,
            "variant_id": variant_id,
            "quantity": -5,
        }))
        .send()
        .await
        .expect("Failed to update cart")
        .json()
        .await
        .expect("Failed to parse cart");

    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(0));
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_cart_remove_unknown_pair_is_noop() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .delete(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": 999_999,
            "variant_id": 999_999,
        }))
        .send()
        .await
        .expect("Failed to call remove");

    // Unmatched references degrade to no-ops, never errors
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_checkout_link_carries_order_message() {
    let client = session_client();
    let base_url = storefront_base_url();
    let (product_id, variant_id) = first_product(&client).await;

    client
        .post(format!("{base_url}/cart/items"))
        .json(&serde_json::json!({
            "product_id": product_id,
            "variant_id": variant_id,
            "quantity": 3,
        }))
        .send()
        .await
        .expect("Failed to add to cart");

    let checkout: Value = client
        .get(format!("{base_url}/cart/checkout"))
        .send()
        .await
        .expect("Failed to get checkout link")
        .json()
        .await
        .expect("Failed to parse checkout");

    let url = checkout["url"].as_str().expect("checkout url");
    assert!(url.starts_with("https://wa.me/"));

    let (_, encoded) = url.split_once("?text=").expect("text parameter");
    let message = urlencoding::decode(encoded).expect("valid encoding");
    assert!(message.contains("Commande"));
    assert!(message.contains("Quantité: 3"));
    assert!(message.contains("Total:"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_clear_cart_returns_empty_sentinel_checkout() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .delete(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to clear cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let checkout: Value = client
        .get(format!("{base_url}/cart/checkout"))
        .send()
        .await
        .expect("Failed to get checkout link")
        .json()
        .await
        .expect("Failed to parse checkout");

    let url = checkout["url"].as_str().expect("checkout url");
    assert!(url.ends_with(&format!("?text={EMPTY_CART_MESSAGE}")));
}
