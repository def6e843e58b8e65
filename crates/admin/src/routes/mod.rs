//! HTTP route handlers for the admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Auth
//! POST /auth/login             - Log in with the shared admin password
//! POST /auth/logout            - Log out
//!
//! # Catalog (all require auth)
//! GET|POST        /products    - List / create
//! GET|PUT|DELETE  /products/{id}
//! GET|POST        /categories
//! GET|PUT|DELETE  /categories/{id}
//! GET|POST        /farms
//! GET|PUT|DELETE  /farms/{id}
//!
//! # Site content (all require auth)
//! GET|POST        /social
//! PUT|DELETE      /social/{id}
//! GET|POST        /footer
//! PUT|DELETE      /footer/{id}
//! GET|PUT         /settings    - Canonical settings (normalization boundary)
//!
//! # Media (all require auth)
//! POST   /uploads              - Multipart upload to Cloudflare Images
//! DELETE /uploads/{id}
//! ```

pub mod auth;
pub mod categories;
pub mod farms;
pub mod footer;
pub mod products;
pub mod settings;
pub mod social;
pub mod uploads;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::destroy),
        )
}

/// Create the farm routes router.
pub fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(farms::index).post(farms::create))
        .route(
            "/{id}",
            get(farms::show).put(farms::update).delete(farms::destroy),
        )
}

/// Create the social link routes router.
pub fn social_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(social::index).post(social::create))
        .route("/{id}", put(social::update).delete(social::destroy))
}

/// Create the footer content routes router.
pub fn footer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(footer::index).post(footer::create))
        .route("/{id}", put(footer::update).delete(footer::destroy))
}

/// Create all routes for the admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/farms", farm_routes())
        .nest("/social", social_routes())
        .nest("/footer", footer_routes())
        .route("/settings", get(settings::show).put(settings::update))
        .route("/uploads", post(uploads::create))
        .route("/uploads/{id}", delete(uploads::destroy))
}
