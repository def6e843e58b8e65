//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Catalog
//! GET  /products               - Active products with variants
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Active categories
//! GET  /farms                  - Active farms with product counts
//!
//! # Site content
//! GET  /social                 - Active social links
//! GET  /footer?section=        - Footer content, per section or all
//! GET  /settings               - Current settings snapshot
//! POST /settings/refresh       - Reload settings, drop catalog cache
//!
//! # Cart (session-persisted)
//! GET    /cart                 - Current cart with derived totals
//! POST   /cart/items           - Add item (snapshots product/variant)
//! PATCH  /cart/items           - Set quantity (0 removes)
//! DELETE /cart/items           - Remove item
//! DELETE /cart                 - Clear cart
//! GET    /cart/checkout        - WhatsApp deep link for the order
//! ```

pub mod cart;
pub mod categories;
pub mod content;
pub mod farms;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route(
            "/items",
            post(cart::add).patch(cart::update).delete(cart::remove),
        )
        .route("/checkout", get(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .route("/categories", get(categories::index))
        .route("/farms", get(farms::index))
        .route("/social", get(content::social))
        .route("/footer", get(content::footer))
        .route("/settings", get(content::settings))
        .route("/settings/refresh", post(content::refresh))
        .nest("/cart", cart_routes())
}
