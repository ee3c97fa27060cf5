//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest quantity a line can hold. Lower requests are clamped up.
pub const MIN_QUANTITY: i64 = 1;

/// A shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// Nothing here checks `Product::stock`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Bumps the existing line or appends a new one. Returns the line's
    /// quantity after the add.
    pub fn add(&mut self, product: &Product) -> i64 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.qty = line.qty.saturating_add(1);
            debug!(product_id = %product.id, qty = line.qty, "Incremented cart line");
            return line.qty;
        }

        self.lines.push(CartLine::new(product.clone()));
        debug!(product_id = %product.id, qty = MIN_QUANTITY, "Added cart line");
        MIN_QUANTITY
    }

    /// Replace a line's quantity.
    ///
    /// Quantities below 1 are stored as 1. Returns false if no line matches.
    pub fn set_quantity(&mut self, id: ProductId, qty: i64) -> bool {
        match self.lines.iter_mut().find(|l| l.product.id == id) {
            Some(line) => {
                line.qty = qty.max(MIN_QUANTITY);
                debug!(product_id = %id, requested = qty, qty = line.qty, "Set cart quantity");
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns false if no line matches.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id = %id, "Removed cart line");
        }
        removed
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantity × unit price over all lines.
    pub fn subtotal(&self) -> Money {
        subtotal_of(&self.lines)
    }

    /// Total units across lines (the cart badge).
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.qty))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sum of line totals for any slice of lines.
pub fn subtotal_of(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_total).sum()
}

/// A product and how many of it the shopper wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Snapshot of the product when it was added.
    pub product: Product,
    /// Quantity, never below [`MIN_QUANTITY`].
    pub qty: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            qty: MIN_QUANTITY,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.qty)
    }
}
