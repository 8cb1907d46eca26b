//! Cart store.
//!
//! Lines are keyed by product id for direct lookup while keeping the order
//! in which products were first added. Every line holds at least one unit;
//! a line whose quantity would reach zero is removed instead.

use hista_core::{Price, Product, ProductId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::debug;

/// One product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Copy of the product as it was when first added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.quantity)
    }
}

/// The session's shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line, or appends a new line with quantity 1.
    pub fn add(&mut self, product: &Product) {
        let line = self
            .lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity: 1,
            });
        debug!(product_id = %product.id, quantity = line.quantity, "Added to cart");
    }

    /// Change a line's quantity by `delta`.
    ///
    /// Unknown ids are ignored. If the new quantity is zero or less the line
    /// is removed; otherwise it keeps its position.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) {
        let Some(line) = self.lines.get_mut(&id) else {
            return;
        };

        let next = i64::from(line.quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.shift_remove(&id);
            debug!(product_id = %id, "Removed from cart");
        } else {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            debug!(product_id = %id, quantity = line.quantity, "Cart quantity updated");
        }
    }

    /// Sum of price × quantity over all lines.
    ///
    /// The result is exact up to `Decimal::MAX`, where it saturates;
    /// [`Price`]'s display rounds half-up to two places. An empty cart
    /// totals zero.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let amount = self
            .lines
            .values()
            .map(|line| line.line_total().amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Price::lyd(amount)
    }

    /// Number of distinct lines (the cart badge), not total units.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    /// Lines in the order products were first added.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }
}
