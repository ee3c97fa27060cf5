//! Shopping cart module.
//!
//! Contains the cart store and its lines.

mod cart;

pub use cart::{subtotal_of, Cart, CartLine, MIN_QUANTITY};
