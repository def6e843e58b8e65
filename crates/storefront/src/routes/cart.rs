//! Cart route handlers.
//!
//! The cart lives in the session: read at the start of each handler,
//! written back after every mutation (last writer per session wins). The
//! engine itself is pure — all catalog I/O happens here, at add time, when
//! the product and variant snapshots are taken.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use fraiche_core::{Cart, CartLine, Money, PriceVariantId, ProductId};

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart payload returned to clients, with derived totals materialized.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub item_count: u32,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            item_count: cart.item_count(),
            lines: cart.lines().to_vec(),
        }
    }
}

/// Checkout payload: the WhatsApp deep link carrying the order message.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub variant_id: PriceVariantId,
    pub quantity: Option<u32>,
}

/// Update quantity request body.
///
/// `quantity` is signed on the wire: zero and below both mean "remove
/// the line", as legacy clients send negatives.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub product_id: ProductId,
    pub variant_id: PriceVariantId,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub product_id: ProductId,
    pub variant_id: PriceVariantId,
}

/// Get the cart from the session, defaulting to empty.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Show the current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartResponse>> {
    let cart = load_cart(&session).await?;
    Ok(Json(cart.into()))
}

/// Add an item to the cart.
///
/// Resolves live product/variant snapshots from the catalog; unknown
/// references are a 404. Stock is not checked — availability is the
/// catalog's concern, not the cart's.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartResponse>> {
    let product = state
        .catalog()
        .product(req.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", req.product_id)))?;
    let variant = product
        .variant(req.variant_id)
        .ok_or_else(|| AppError::NotFound(format!("price variant {}", req.variant_id)))?
        .clone();

    let mut cart = load_cart(&session).await?;
    cart.add_item(product, variant, req.quantity.unwrap_or(1));
    save_cart(&session, &cart).await?;

    Ok(Json(cart.into()))
}

/// Set an item's quantity (absolute). Zero removes the line.
///
/// Unmatched references are a no-op, mirroring the engine's semantics.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<CartResponse>> {
    let quantity = u32::try_from(req.quantity.max(0)).unwrap_or(u32::MAX);

    let mut cart = load_cart(&session).await?;
    cart.update_quantity(req.product_id, req.variant_id, quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(cart.into()))
}

/// Remove an item from the cart. Absent pairs are a no-op.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(req): Json<RemoveItemRequest>,
) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.remove_item(req.product_id, req.variant_id);
    save_cart(&session, &cart).await?;

    Ok(Json(cart.into()))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartResponse>> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(cart.into()))
}

/// Produce the WhatsApp checkout link for the current cart.
///
/// There is no server-side order record: the encoded message appended to
/// the `wa.me` link is the entire order-submission protocol.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let settings = state.settings().current();

    let message = cart.order_message(&settings.shop_name);
    let url = format!("{}?text={message}", settings.whatsapp_base());

    Ok(Json(CheckoutResponse { url }))
}
