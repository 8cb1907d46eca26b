//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::price::Price;

/// A purchasable product.
///
/// Products are defined once when the catalog is loaded and never mutated
/// afterwards. Cart lines keep their own copy. Every price is in Libyan
/// dinars; a `currency_code` key in catalog data is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in dinars. Must not be negative.
    pub price: Decimal,
    /// Image reference (URL or path), passed through untouched.
    pub image: String,
    pub category: Category,
    pub description: String,
}

impl Product {
    /// Unit price in dinars.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::lyd(self.price)
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// An empty needle matches every product.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
