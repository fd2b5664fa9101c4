//! Storefront domain types and logic for Savora.
//!
//! This crate provides the core types for a food-delivery storefront:
//!
//! - **Catalog**: Products, reviews, categories, client-side filtering
//! - **Cart**: Line items keyed by product, pricing with the delivery-fee rule
//! - **Offers**: Discount codes with validity metadata
//! - **Checkout**: Addresses, delivery slots, payment methods, the
//!   multi-step checkout flow, orders and tracking
//! - **Account**: Users, roles, saved addresses, favorites
//!
//! # Example
//!
//! ```rust,ignore
//! use savora_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(paratha.clone());
//! cart.add(paratha); // same product: quantity becomes 2
//!
//! let pricing = cart.pricing()?;
//! println!("Payable: {}", pricing.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod offers;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, NutritionalInfo, Product, ProductFilter, Review, SortKey};

    // Cart
    pub use crate::cart::{
        Cart, CartItem, CartPricing, LinePricing, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD,
    };

    // Offers
    pub use crate::offers::{DiscountType, Offer};

    // Checkout
    pub use crate::checkout::{
        Address, AddressKind, AppliedCoupon, CheckoutFlow, CheckoutStep, DeliverySlot, Order,
        OrderStatus, PaymentMethod, PaymentStatus, TrackingUpdate,
    };

    // Account
    pub use crate::account::{Role, User, UserPreferences};
}
