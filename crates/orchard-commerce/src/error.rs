//! Storefront error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these cover lookups, the two empty-cart
/// guards and the mail hand-off.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Checkout or dispatch attempted with nothing in the cart.
    ///
    /// `notice` is the message shown to the shopper.
    #[error("{notice}")]
    EmptyCart { notice: &'static str },

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Payment method string was neither `bank` nor `cod`.
    #[error("Unknown payment method: {0} (expected \"bank\" or \"cod\")")]
    UnknownPaymentMethod(String),

    /// The mail client could not be launched.
    #[error("Mail hand-off failed: {0}")]
    Dispatch(String),
}

impl StoreError {
    /// Whether this is one of the empty-cart guards.
    pub fn is_empty_cart(&self) -> bool {
        matches!(self, StoreError::EmptyCart { .. })
    }
}
