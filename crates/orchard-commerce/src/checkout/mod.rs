//! Checkout module.
//!
//! Contains the customer form, payment selection, dialog state, order text
//! and the mail hand-off.

mod customer;
mod dispatch;
mod flow;
mod order;
mod payment;

pub use customer::{CustomerDefaults, CustomerInfo};
pub use dispatch::{mailto_uri, Dispatch, MailClient, RecordingMailClient};
pub use flow::{
    CheckoutState, CheckoutView, EMPTY_CART_CHECKOUT_NOTICE, EMPTY_CART_DISPATCH_NOTICE,
};
pub use order::{
    footer_line, format_cart, format_order, format_order_line, format_quick_order, order_subject,
    payment_panel, EMPTY_CART_TEXT, QUICK_ORDER_SUBJECT,
};
pub use payment::PaymentMethod;
