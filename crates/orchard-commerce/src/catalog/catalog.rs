//! The fixed product listing.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;

/// Read-only list of products offered for the session.
///
/// Order is preserved as given; ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StoreError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The farm's own three products.
    pub fn reference() -> Self {
        Self {
            products: vec![
                Product::new(1u32, "Cam Mường Khương - Hộp 5kg", Money::vnd(450_000))
                    .with_short("Cam vườn chín cây - vỏ mỏng, ngọt, mọng nước.")
                    .with_image("/src/assets/cam.jpg")
                    .with_stock(120),
                Product::new(2u32, "Quít H'Mông - Túi 3kg", Money::vnd(280_000))
                    .with_short("Quít thơm, nhiều múi, bảo quản lâu, thích hợp làm quà.")
                    .with_image("/src/assets/quit.jpg")
                    .with_stock(80),
                Product::new(3u32, "Combo Cam + Quít - 8kg", Money::vnd(680_000))
                    .with_short("Gói quà tươi ngon - phù hợp biếu tặng lễ tết.")
                    .with_image("/src/assets/combo.jpg")
                    .with_stock(45),
            ],
        }
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing if absent.
    pub fn find(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.get(id).ok_or(StoreError::ProductNotFound(id))
    }

    /// Products whose name contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(query)).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
