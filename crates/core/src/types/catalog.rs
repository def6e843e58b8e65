//! Catalog entities: products, price variants, categories and farms.
//!
//! These are value snapshots of what the catalog database holds. The cart
//! embeds copies of [`Product`] and [`PriceVariant`] taken at add time, so
//! later catalog edits never rewrite a shopper's cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, FarmId, PriceVariantId, ProductId};
use super::money::Money;

/// A purchasable unit of a product ("500g", "1kg", "lot de 5") carrying its
/// own price and an optional strike-through original price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceVariant {
    pub id: PriceVariantId,
    pub product_id: ProductId,
    pub label: String,
    pub price: Money,
    /// Pre-discount price shown struck through, when promoted.
    pub original_price: Option<Money>,
    pub is_default: bool,
}

/// A catalog product with its ordered media and price variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Image URLs in display order.
    pub images: Vec<String>,
    /// Video URLs in display order.
    pub videos: Vec<String>,
    pub category_id: CategoryId,
    pub farm_id: Option<FarmId>,
    pub stock: i32,
    /// Price variants in insertion order.
    pub prices: Vec<PriceVariant>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The variant a consumer should preselect.
    ///
    /// Nothing upstream enforces default uniqueness, so the tie-break is
    /// deterministic: first variant flagged `is_default` in insertion
    /// order, falling back to the first variant. More than one flagged
    /// default is a data-quality condition and is logged, not raised.
    #[must_use]
    pub fn default_variant(&self) -> Option<&PriceVariant> {
        let flagged = self.prices.iter().filter(|v| v.is_default).count();
        if flagged > 1 {
            tracing::warn!(
                product_id = %self.id,
                flagged,
                "product has multiple default price variants; using the first"
            );
        }
        self.prices
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.prices.first())
    }

    /// Find a variant of this product by ID.
    #[must_use]
    pub fn variant(&self, variant_id: PriceVariantId) -> Option<&PriceVariant> {
        self.prices.iter().find(|v| v.id == variant_id)
    }
}

/// A product category, ordered by `position` on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A partner farm (supplier) products can be attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Farm {
    pub id: FarmId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn variant(id: i32, is_default: bool) -> PriceVariant {
        PriceVariant {
            id: PriceVariantId::new(id),
            product_id: ProductId::new(1),
            label: format!("{id}00g"),
            price: Money::new("4.5".parse().unwrap()),
            original_price: None,
            is_default,
        }
    }

    fn product(prices: Vec<PriceVariant>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Tomates anciennes".to_string(),
            description: String::new(),
            images: Vec::new(),
            videos: Vec::new(),
            category_id: CategoryId::new(1),
            farm_id: None,
            stock: 10,
            prices,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_variant_prefers_flag() {
        let p = product(vec![variant(1, false), variant(2, true)]);
        assert_eq!(p.default_variant().unwrap().id, PriceVariantId::new(2));
    }

    #[test]
    fn test_default_variant_first_flagged_wins_on_divergent_data() {
        let p = product(vec![variant(1, true), variant(2, true), variant(3, true)]);
        assert_eq!(p.default_variant().unwrap().id, PriceVariantId::new(1));
    }

    #[test]
    fn test_default_variant_falls_back_to_first() {
        let p = product(vec![variant(1, false), variant(2, false)]);
        assert_eq!(p.default_variant().unwrap().id, PriceVariantId::new(1));
    }

    #[test]
    fn test_default_variant_empty() {
        assert!(product(Vec::new()).default_variant().is_none());
    }

    #[test]
    fn test_variant_lookup() {
        let p = product(vec![variant(1, true), variant(2, false)]);
        assert!(p.variant(PriceVariantId::new(2)).is_some());
        assert!(p.variant(PriceVariantId::new(9)).is_none());
    }
}
