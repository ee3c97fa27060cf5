//! A single shopping session.
//!
//! [`Storefront`] owns everything a visitor can change: the cart, the order
//! form, the payment choice and the checkout dialog. It is a plain struct
//! with one owner; front ends call its methods in response to input.

use tracing::{debug, info};

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::checkout::{
    format_cart, format_order, format_quick_order, order_subject, payment_panel, CheckoutState,
    CheckoutView, CustomerDefaults, CustomerInfo, Dispatch, MailClient, PaymentMethod,
    QUICK_ORDER_SUBJECT,
};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::site::SiteConfig;

/// Session state for one visitor.
#[derive(Debug, Clone)]
pub struct Storefront {
    site: SiteConfig,
    catalog: Catalog,
    cart: Cart,
    customer: CustomerInfo,
    payment: PaymentMethod,
    checkout: CheckoutView,
    last_dispatch: Option<Dispatch>,
}

impl Storefront {
    /// Start a session. The order form is seeded according to `defaults`.
    pub fn new(site: SiteConfig, catalog: Catalog, defaults: CustomerDefaults) -> Self {
        let customer = CustomerInfo::seeded(&site, defaults);
        Self {
            site,
            catalog,
            cart: Cart::new(),
            customer,
            payment: PaymentMethod::default(),
            checkout: CheckoutView::new(),
            last_dispatch: None,
        }
    }

    /// Set the initially selected payment method.
    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Edit the order form.
    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = customer;
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    pub fn set_payment(&mut self, payment: PaymentMethod) {
        debug!(payment = payment.as_str(), "Payment method selected");
        self.payment = payment;
    }

    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    pub fn checkout(&self) -> &CheckoutView {
        &self.checkout
    }

    /// The most recent hand-off, if any.
    pub fn last_dispatch(&self) -> Option<&Dispatch> {
        self.last_dispatch.as_ref()
    }

    /// Catalog products matching the search box.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.catalog.search(query)
    }

    /// Add one unit of a catalog product. Returns the new line quantity.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<i64, StoreError> {
        let product = self.catalog.find(id)?;
        Ok(self.cart.add(product))
    }

    /// Set a cart line's quantity (clamped to at least 1).
    pub fn update_quantity(&mut self, id: ProductId, qty: i64) -> bool {
        self.cart.set_quantity(id, qty)
    }

    pub fn remove_item(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// "Place order from cart": open the dialog if the cart has items.
    pub fn open_checkout(&mut self) -> Result<(), StoreError> {
        self.checkout.open(&self.cart)?;
        Ok(())
    }

    /// The header cart button: open the dialog regardless of contents.
    pub fn view_cart(&mut self) {
        self.checkout.show();
    }

    pub fn close_checkout(&mut self) {
        self.checkout.close();
    }

    /// Order text for the current cart, form and payment choice.
    pub fn order_text(&self) -> String {
        format_order(&self.site, &self.customer, self.cart.lines(), self.payment)
    }

    /// The dialog's cart listing.
    pub fn cart_text(&self) -> String {
        format_cart(self.cart.lines())
    }

    /// The dialog's payment box.
    pub fn payment_text(&self) -> String {
        payment_panel(&self.site, self.payment)
    }

    /// Send the cart order to the seller through `mail`.
    ///
    /// Refuses when the cart is empty. On success the cart and dialog are
    /// left as they were.
    pub fn dispatch_order<M: MailClient + ?Sized>(
        &mut self,
        mail: &M,
    ) -> Result<Dispatch, StoreError> {
        self.checkout.ensure_dispatchable(&self.cart)?;

        let dispatch = Dispatch::send(
            mail,
            self.site.email.as_str(),
            order_subject(&self.customer),
            self.order_text(),
        )?;
        self.checkout.mark_dispatched();
        info!(
            to = %dispatch.to,
            lines = self.cart.lines().len(),
            subtotal = self.cart.subtotal().amount(),
            payment = self.payment.as_str(),
            "Order handed off to mail client"
        );

        self.last_dispatch = Some(dispatch.clone());
        Ok(dispatch)
    }

    /// Send the contact form as a quick order, without the cart.
    pub fn dispatch_quick_order<M: MailClient + ?Sized>(
        &mut self,
        mail: &M,
    ) -> Result<Dispatch, StoreError> {
        let dispatch = Dispatch::send(
            mail,
            self.site.email.as_str(),
            QUICK_ORDER_SUBJECT,
            format_quick_order(&self.customer),
        )?;
        info!(to = %dispatch.to, "Quick order handed off to mail client");

        self.last_dispatch = Some(dispatch.clone());
        Ok(dispatch)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(
            SiteConfig::default(),
            Catalog::default(),
            CustomerDefaults::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{RecordingMailClient, EMPTY_CART_DISPATCH_NOTICE};

    #[test]
    fn test_add_unknown_product() {
        let mut store = Storefront::default();
        let err = store.add_to_cart(ProductId::new(9)).unwrap_err();
        assert_eq!(err, StoreError::ProductNotFound(ProductId::new(9)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_dispatch_order_keeps_cart_and_dialog() {
        let mut store = Storefront::default();
        store.add_to_cart(ProductId::new(1)).unwrap();
        store.open_checkout().unwrap();

        let mail = RecordingMailClient::default();
        let dispatch = store.dispatch_order(&mail).unwrap();

        assert_eq!(dispatch.to, "lienhe@camquitmuongkhuong.vn");
        assert_eq!(dispatch.subject, "Đơn hàng từ website - ");
        assert_eq!(dispatch.body, store.order_text());
        assert_eq!(mail.opened().len(), 1);
        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.checkout_state(), CheckoutState::CheckoutOpen);
        assert_eq!(store.checkout().dispatched(), 1);
        assert_eq!(store.last_dispatch(), Some(&dispatch));
    }

    #[test]
    fn test_dispatch_order_empty_cart() {
        let mut store = Storefront::default();
        store.view_cart();

        let mail = RecordingMailClient::default();
        let err = store.dispatch_order(&mail).unwrap_err();

        assert_eq!(
            err,
            StoreError::EmptyCart {
                notice: EMPTY_CART_DISPATCH_NOTICE
            }
        );
        assert!(mail.opened().is_empty());
        assert!(store.last_dispatch().is_none());
    }

    #[test]
    fn test_quick_order_needs_no_cart() {
        let mut store = Storefront::default();
        store.customer_mut().name = "Sùng A Dế".to_string();

        let mail = RecordingMailClient::default();
        let dispatch = store.dispatch_quick_order(&mail).unwrap();

        assert_eq!(dispatch.subject, "Đặt hàng nhanh");
        assert!(dispatch.body.starts_with("Đặt hàng nhanh - Sùng A Dế - 0989 123 456 - "));
        assert_eq!(store.checkout_state(), CheckoutState::Browsing);
    }

    #[test]
    fn test_payment_selection() {
        let mut store = Storefront::default().with_payment(PaymentMethod::Cod);
        assert_eq!(store.payment_text(), "Thanh toán: COD");

        store.set_payment(PaymentMethod::Bank);
        assert!(store.payment_text().contains("Agribank"));
    }

    #[test]
    fn test_clear_cart_empties_and_rearms_guard() {
        let mut store = Storefront::default();
        store.add_to_cart(ProductId::new(1)).unwrap();
        store.add_to_cart(ProductId::new(2)).unwrap();
        store.open_checkout().unwrap();

        store.clear_cart();

        assert!(store.cart().is_empty());
        assert!(store.subtotal().is_zero());
        assert_eq!(store.checkout_state(), CheckoutState::CheckoutOpen);
        let mail = RecordingMailClient::default();
        assert!(store.dispatch_order(&mail).unwrap_err().is_empty_cart());
        assert!(mail.opened().is_empty());
    }

    #[test]
    fn test_view_cart_opens_dialog_when_empty() {
        let mut store = Storefront::default();
        store.view_cart();
        assert_eq!(store.checkout_state(), CheckoutState::CheckoutOpen);
    }
}
