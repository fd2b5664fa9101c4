//! Shopping cart: line items keyed by product, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartPricing, LinePricing, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
