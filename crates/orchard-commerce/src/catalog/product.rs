//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are fixed for the session. `stock` is shown to shoppers but no
/// operation reads it: the farm takes orders regardless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name (e.g., "Cam Mường Khương - Hộp 5kg").
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description for listings.
    #[serde(default)]
    pub short: String,
    /// Image path, resolved by whatever serves static assets.
    #[serde(default)]
    pub image: String,
    /// Units on hand (informational).
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Create a product with no description, image or stock figure.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            short: String::new(),
            image: String::new(),
            stock: 0,
        }
    }

    /// Set the short description.
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Set the image path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the stock figure.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1u32, "Cam Mường Khương - Hộp 5kg", Money::vnd(450_000))
            .with_short("Cam vườn chín cây")
            .with_stock(120);
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.amount(), 450_000);
        assert_eq!(product.stock, 120);
        assert!(product.image.is_empty());
    }

    #[test]
    fn test_product_matches_ignores_case() {
        let product = Product::new(2u32, "Quít H'Mông - Túi 3kg", Money::vnd(280_000));
        assert!(product.matches("quít"));
        assert!(product.matches("QUÍT"));
        assert!(product.matches("h'mông"));
        assert!(product.matches(""));
        assert!(!product.matches("cam"));
    }

    #[test]
    fn test_product_deserialize_defaults() {
        let product: Product =
            serde_json::from_str(r#"{ "id": 9, "name": "Mật ong", "price": 150000 }"#).unwrap();
        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.price, Money::vnd(150_000));
        assert!(product.short.is_empty());
        assert_eq!(product.stock, 0);
    }
}
