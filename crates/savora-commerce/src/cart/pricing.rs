//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal above which delivery is free (strictly greater).
pub const FREE_DELIVERY_THRESHOLD: i64 = 500;

/// Flat delivery fee below the free-delivery threshold.
pub const DELIVERY_FEE: i64 = 40;

/// Complete pricing breakdown for a cart.
///
/// Computed at checkout time and never stored redundantly elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery fee (zero above the free-delivery threshold).
    pub delivery_fee: Money,
    /// Payable total (subtotal + delivery fee).
    pub total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Check whether this order qualified for free delivery.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product for this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Line total (unit price × quantity).
    pub line_total: Money,
}
