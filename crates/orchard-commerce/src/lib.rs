//! Storefront domain logic for the Mường Khương orchard.
//!
//! The crate models a single shopping session over a small, fixed catalog:
//!
//! - **Catalog**: Products with price, description, image path and stock
//! - **Cart**: Lines keyed by product, quantities, subtotal
//! - **Checkout**: Customer form, payment method, dialog state, order text
//! - **Dispatch**: `mailto:` hand-off to the customer's mail client
//!
//! Everything is in-memory and owned by one [`Storefront`]. Seller details are
//! passed in as a [`SiteConfig`] value.
//!
//! # Example
//!
//! ```rust
//! use orchard_commerce::prelude::*;
//!
//! let mut store = Storefront::new(
//!     SiteConfig::default(),
//!     Catalog::default(),
//!     CustomerDefaults::SellerContact,
//! );
//!
//! store.add_to_cart(ProductId::new(1)).unwrap();
//! store.add_to_cart(ProductId::new(2)).unwrap();
//! store.add_to_cart(ProductId::new(2)).unwrap();
//! assert_eq!(store.subtotal(), Money::vnd(1_010_000));
//!
//! store.open_checkout().unwrap();
//! let mail = RecordingMailClient::default();
//! let dispatch = store.dispatch_order(&mail).unwrap();
//! assert!(dispatch.uri.starts_with("mailto:"));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod site;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod storefront;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;
pub use site::{BankAccount, SiteConfig};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::site::{BankAccount, SiteConfig};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::{
        format_order, format_quick_order, mailto_uri, payment_panel, CheckoutState,
        CheckoutView, CustomerDefaults, CustomerInfo, Dispatch, MailClient, PaymentMethod,
        RecordingMailClient,
    };
}
