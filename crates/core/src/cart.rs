//! Cart aggregation and order-message serialization.
//!
//! The cart is an ordered ledger of (product, price variant) lines keyed by
//! `(ProductId, PriceVariantId)`. Totals are derived from the line list on
//! every read, never stored. All operations are synchronous, total and
//! infallible: an unmatched reference on removal or update is a no-op, not
//! an error. Stock is deliberately not enforced here; availability checks
//! belong to the catalog, not the cart.
//!
//! Checkout has no server-side order record: the URL-encoded text produced
//! by [`Cart::order_message`] appended to a `wa.me` deep link is the entire
//! order-submission protocol.

use serde::{Deserialize, Serialize};

use crate::types::{Money, PriceVariant, PriceVariantId, Product, ProductId};

/// Text returned by [`Cart::order_message`] when the cart holds no lines.
pub const EMPTY_CART_MESSAGE: &str = "Votre panier est vide";

/// One (product, price variant) pairing with its quantity.
///
/// `product` and `variant` are value snapshots taken when the line was
/// added; later catalog edits do not rewrite carts. Quantity is always at
/// least 1 — a line that would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub variant: PriceVariant,
    pub quantity: u32,
}

impl CartLine {
    /// Line price: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.variant.price * self.quantity
    }
}

/// The authoritative set of cart lines for one shopper session.
///
/// Serializes as its line list only; `total` and `item_count` are
/// recomputed from the lines and are not independently mutable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` of a product/variant pair.
    ///
    /// Merges into an existing line matching `(product.id, variant.id)`,
    /// otherwise appends. A zero quantity is a no-op: lines below one are
    /// never stored. Stock is not consulted.
    pub fn add_item(&mut self, product: Product, variant: PriceVariant, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.find_mut(product.id, variant.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product,
                variant,
                quantity,
            }),
        }
    }

    /// Delete the matching line. Absent pairs are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId, variant_id: PriceVariantId) {
        self.lines
            .retain(|line| !(line.product.id == product_id && line.variant.id == variant_id));
    }

    /// Set the matching line's quantity to `quantity` (absolute, not an
    /// increment). Zero behaves as [`Cart::remove_item`]. Absent pairs are
    /// a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        variant_id: PriceVariantId,
        quantity: u32,
    ) {
        if quantity == 0 {
            self.remove_item(product_id, variant_id);
            return;
        }
        if let Some(line) = self.find_mut(product_id, variant_id) {
            line.quantity = quantity;
        }
    }

    /// Reset to the empty cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The URL-encoded order text sent through the WhatsApp deep link.
    ///
    /// Enumerates each line (name, variant label, unit price, quantity,
    /// line subtotal) followed by the grand total and item count. Returns
    /// the unencoded [`EMPTY_CART_MESSAGE`] sentinel when there are no
    /// lines.
    #[must_use]
    pub fn order_message(&self, shop_name: &str) -> String {
        if self.lines.is_empty() {
            return EMPTY_CART_MESSAGE.to_string();
        }

        let mut message = format!("🛒 *Commande {shop_name}* 🛒\n\n");
        for line in &self.lines {
            message.push_str(&format!("📦 *{}*\n", line.product.name));
            message.push_str(&format!(
                "   {} - {}€\n",
                line.variant.label, line.variant.price
            ));
            message.push_str(&format!("   Quantité: {}\n", line.quantity));
            message.push_str(&format!(
                "   Sous-total: {}€\n\n",
                line.subtotal().display_fixed()
            ));
        }
        message.push_str(&format!("💰 *Total: {}€*\n", self.total().display_fixed()));
        message.push_str(&format!("📱 Articles: {}", self.item_count()));

        urlencoding::encode(&message).into_owned()
    }

    fn find_mut(
        &mut self,
        product_id: ProductId,
        variant_id: PriceVariantId,
    ) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id && line.variant.id == variant_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::CategoryId;

    fn variant(product_id: i32, id: i32, price: &str) -> PriceVariant {
        PriceVariant {
            id: PriceVariantId::new(id),
            product_id: ProductId::new(product_id),
            label: "500g".to_string(),
            price: Money::new(price.parse().unwrap()),
            original_price: None,
            is_default: true,
        }
    }

    fn product(id: i32, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            images: Vec::new(),
            videos: Vec::new(),
            category_id: CategoryId::new(1),
            farm_id: None,
            stock: 0,
            prices: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn decoded(cart: &Cart) -> String {
        urlencoding::decode(&cart.order_message("Boutique"))
            .unwrap()
            .into_owned()
    }

    #[test]
    fn test_add_item_merges_same_pair() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Money::new("13.5".parse().unwrap()));
    }

    #[test]
    fn test_add_item_distinct_variants_get_own_lines() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 1);
        cart.add_item(product(1, "Tomates"), variant(1, 2, "8.0"), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_item_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_ignores_stock() {
        let mut cart = Cart::new();
        let mut out_of_stock = product(1, "Tomates");
        out_of_stock.stock = 0;
        cart.add_item(out_of_stock, variant(1, 1, "4.5"), 50);
        assert_eq!(cart.item_count(), 50);
    }

    #[test]
    fn test_remove_item_absent_is_noop_and_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 1);

        cart.remove_item(ProductId::new(9), PriceVariantId::new(9));
        assert_eq!(cart.lines().len(), 1);

        let before = cart.clone();
        cart.remove_item(ProductId::new(9), PriceVariantId::new(9));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        cart.update_quantity(ProductId::new(1), PriceVariantId::new(1), 5);

        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut removed = Cart::new();
        removed.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        removed.remove_item(ProductId::new(1), PriceVariantId::new(1));

        let mut zeroed = Cart::new();
        zeroed.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        zeroed.update_quantity(ProductId::new(1), PriceVariantId::new(1), 0);

        assert_eq!(zeroed, removed);
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_pair_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        cart.update_quantity(ProductId::new(9), PriceVariantId::new(9), 7);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.order_message("Boutique"), EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_order_message_lists_lines_and_totals() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "3.2"), 1);
        cart.add_item(product(2, "Fraises"), variant(2, 2, "5.8"), 2);

        let text = decoded(&cart);
        assert!(text.contains("🛒 *Commande Boutique* 🛒"));
        assert!(text.contains("📦 *Tomates*"));
        assert!(text.contains("500g - 3.2€"));
        assert!(text.contains("Sous-total: 3.20€"));
        assert!(text.contains("📦 *Fraises*"));
        assert!(text.contains("Sous-total: 11.60€"));
        assert!(text.contains("💰 *Total: 14.80€*"));
        assert!(text.contains("📱 Articles: 3"));
    }

    #[test]
    fn test_order_message_is_url_encoded() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 1);

        let encoded = cart.order_message("Boutique");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(encoded.contains("Quantit%C3%A9"));
    }

    #[test]
    fn test_serde_round_trip_preserves_lines_only() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "Tomates"), variant(1, 1, "4.5"), 2);

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.get("lines").is_some());
        assert!(json.get("total").is_none());

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back.total(), Money::new("9".parse().unwrap()));
    }
}
