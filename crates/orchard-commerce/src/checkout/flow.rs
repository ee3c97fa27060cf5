//! Checkout dialog state machine.

use crate::cart::Cart;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Notice when "place order from cart" is pressed with an empty cart.
pub const EMPTY_CART_CHECKOUT_NOTICE: &str = "Giỏ hàng rỗng — thêm sản phẩm trước khi đặt hàng.";

/// Notice when "send order" is pressed with an empty cart.
pub const EMPTY_CART_DISPATCH_NOTICE: &str = "Giỏ hàng rỗng — vui lòng thêm sản phẩm.";

/// Whether the checkout dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// Looking at the catalog.
    #[default]
    Browsing,
    /// Checkout dialog open.
    CheckoutOpen,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Browsing => "browsing",
            CheckoutState::CheckoutOpen => "checkout_open",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutState::Browsing => "Browsing",
            CheckoutState::CheckoutOpen => "Checkout",
        }
    }
}

/// Checkout dialog state.
///
/// Sending an order leaves the dialog as it is; only `close` returns to
/// browsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckoutView {
    state: CheckoutState,
    /// Orders handed off while this session was open.
    dispatched: u32,
}

impl CheckoutView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Check if the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.state == CheckoutState::CheckoutOpen
    }

    /// Open the dialog to place an order from the cart.
    ///
    /// Refuses with [`EMPTY_CART_CHECKOUT_NOTICE`] when the cart is empty;
    /// the state is left untouched.
    pub fn open(&mut self, cart: &Cart) -> Result<CheckoutState, StoreError> {
        if cart.is_empty() {
            warn!(state = self.state.as_str(), "Checkout refused: cart is empty");
            return Err(StoreError::EmptyCart {
                notice: EMPTY_CART_CHECKOUT_NOTICE,
            });
        }
        self.state = CheckoutState::CheckoutOpen;
        Ok(self.state)
    }

    /// Open the dialog from the cart button, even when the cart is empty.
    pub fn show(&mut self) -> CheckoutState {
        self.state = CheckoutState::CheckoutOpen;
        self.state
    }

    /// Close the dialog.
    pub fn close(&mut self) -> CheckoutState {
        self.state = CheckoutState::Browsing;
        self.state
    }

    /// Guard for sending an order. Does not change state.
    pub fn ensure_dispatchable(&self, cart: &Cart) -> Result<(), StoreError> {
        if cart.is_empty() {
            warn!(state = self.state.as_str(), "Order not sent: cart is empty");
            return Err(StoreError::EmptyCart {
                notice: EMPTY_CART_DISPATCH_NOTICE,
            });
        }
        Ok(())
    }

    /// Record that an order was handed off.
    pub fn mark_dispatched(&mut self) {
        self.dispatched = self.dispatched.saturating_add(1);
    }

    /// Number of orders handed off.
    pub fn dispatched(&self) -> u32 {
        self.dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Product::new(1u32, "Cam", Money::vnd(450_000)));
        cart
    }

    #[test]
    fn test_checkout_creation() {
        let view = CheckoutView::new();
        assert_eq!(view.state(), CheckoutState::Browsing);
        assert_eq!(view.dispatched(), 0);
    }

    #[test]
    fn test_open_requires_items() {
        let mut view = CheckoutView::new();

        let err = view.open(&Cart::new()).unwrap_err();
        assert_eq!(
            err,
            StoreError::EmptyCart {
                notice: EMPTY_CART_CHECKOUT_NOTICE
            }
        );
        assert_eq!(view.state(), CheckoutState::Browsing);

        assert_eq!(view.open(&filled_cart()), Ok(CheckoutState::CheckoutOpen));
        assert!(view.is_open());
    }

    #[test]
    fn test_show_ignores_empty_cart() {
        let mut view = CheckoutView::new();
        assert_eq!(view.show(), CheckoutState::CheckoutOpen);
    }

    #[test]
    fn test_close_always_returns_to_browsing() {
        let mut view = CheckoutView::new();
        assert_eq!(view.close(), CheckoutState::Browsing);

        view.open(&filled_cart()).unwrap();
        assert_eq!(view.close(), CheckoutState::Browsing);
    }

    #[test]
    fn test_dispatch_guard() {
        let mut view = CheckoutView::new();
        view.show();

        let err = view.ensure_dispatchable(&Cart::new()).unwrap_err();
        assert_eq!(err.to_string(), EMPTY_CART_DISPATCH_NOTICE);
        assert!(view.is_open());

        assert!(view.ensure_dispatchable(&filled_cart()).is_ok());
    }
}
