//! Integration tests for Fraiche.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, run migrations and seed
//! cargo run -p fraiche-cli -- migrate
//! cargo run -p fraiche-cli -- seed --file crates/cli/seeds/boutique.yaml --reset
//!
//! # Start both servers
//! cargo run -p fraiche-storefront &
//! cargo run -p fraiche-admin &
//!
//! # Run the ignored tests
//! cargo test -p fraiche-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Session cart flow and checkout link
//! - `admin_catalog` - Admin auth, CRUD and settings normalization

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// The shared admin password test deployments are provisioned with.
#[must_use]
pub fn admin_password() -> String {
    std::env::var("ADMIN_TEST_PASSWORD").unwrap_or_else(|_| "fraiche-integration".to_string())
}

/// A cookie-holding client, so the session survives across requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
