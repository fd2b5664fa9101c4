//! Discount offer types.
//!
//! Offers carry a validity window, minimum-order and usage constraints, but
//! the store's `apply_offer` only checks that the code exists. The extra
//! validation stays on the model so wiring it in later is a local change.

use crate::ids::{CategoryId, OfferId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Type of discount an offer grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Percentage off the subtotal.
    Percentage,
    /// Fixed amount off.
    Fixed,
}

/// A discount code with constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Unique offer identifier.
    pub id: OfferId,
    /// Code the customer enters (e.g., "WELCOME50").
    pub code: String,
    /// Display title.
    pub title: String,
    /// Description shown in the offers list.
    pub description: String,
    /// Type of discount.
    pub discount_type: DiscountType,
    /// Percentage (0-100) or fixed amount, per `discount_type`.
    pub discount_value: f64,
    /// Minimum order subtotal for the offer to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<Money>,
    /// Cap on the discount amount for percentage offers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Money>,
    /// Validity window start (Unix timestamp).
    pub valid_from: i64,
    /// Validity window end (Unix timestamp).
    pub valid_until: i64,
    /// Maximum number of redemptions (None = unlimited).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    /// Redemptions so far.
    pub usage_count: u32,
    /// Restrict to specific products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_products: Option<Vec<ProductId>>,
    /// Restrict to specific categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_categories: Option<Vec<CategoryId>>,
}

impl Offer {
    /// Create a percentage offer.
    pub fn percentage(
        code: impl Into<String>,
        title: impl Into<String>,
        percent: f64,
        valid_from: i64,
        valid_until: i64,
    ) -> Self {
        Self {
            id: OfferId::generate(),
            code: code.into(),
            title: title.into(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: percent,
            min_order_value: None,
            max_discount: None,
            valid_from,
            valid_until,
            usage_limit: None,
            usage_count: 0,
            applicable_products: None,
            applicable_categories: None,
        }
    }

    /// Create a fixed-amount offer.
    pub fn fixed(
        code: impl Into<String>,
        title: impl Into<String>,
        amount: Money,
        valid_from: i64,
        valid_until: i64,
    ) -> Self {
        Self {
            id: OfferId::generate(),
            code: code.into(),
            title: title.into(),
            description: String::new(),
            discount_type: DiscountType::Fixed,
            discount_value: amount.amount as f64,
            min_order_value: None,
            max_discount: None,
            valid_from,
            valid_until,
            usage_limit: None,
            usage_count: 0,
            applicable_products: None,
            applicable_categories: None,
        }
    }

    /// Set the minimum order value.
    pub fn with_min_order(mut self, amount: Money) -> Self {
        self.min_order_value = Some(amount);
        self
    }

    /// Set the maximum discount cap.
    pub fn with_max_discount(mut self, amount: Money) -> Self {
        self.max_discount = Some(amount);
        self
    }

    /// Set the usage limit.
    pub fn with_usage_limit(mut self, limit: u32) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Check whether `now` falls inside the validity window.
    pub fn is_within_window(&self, now: i64) -> bool {
        now >= self.valid_from && now <= self.valid_until
    }

    /// Check whether the redemption limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.usage_count >= limit)
            .unwrap_or(false)
    }

    /// Check whether a subtotal meets the minimum order value.
    pub fn meets_minimum(&self, subtotal: &Money) -> bool {
        match self.min_order_value {
            Some(min) => subtotal.amount >= min.amount,
            None => true,
        }
    }

    /// Discount amount for a subtotal.
    ///
    /// Percentage offers are capped at `max_discount` when set; fixed offers
    /// never exceed the subtotal.
    pub fn discount_for(&self, subtotal: &Money) -> Money {
        match self.discount_type {
            DiscountType::Percentage => {
                let amount = subtotal.percentage(self.discount_value);
                match self.max_discount {
                    Some(cap) => amount.min(&cap),
                    None => amount,
                }
            }
            DiscountType::Fixed => {
                let amount = Money::new(self.discount_value as i64, subtotal.currency);
                amount.min(subtotal)
            }
        }
    }
}
