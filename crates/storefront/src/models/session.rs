//! Session key registry.
//!
//! The cart is the only session-persisted state on the storefront. It is
//! read once per request that touches it and written back after every
//! mutation; the last writer per session wins.

/// Session keys for storefront data.
pub mod keys {
    /// Key the serialized cart is stored under.
    pub const CART: &str = "cart";
}
