//! Order types.

use crate::cart::{CartItem, CartPricing};
use crate::checkout::{Address, DeliverySlot, PaymentMethod, PaymentStatus};
use crate::ids::{OrderId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status. Variants are declared in delivery order, so the derived
/// ordering matches timeline position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, not yet confirmed by the kitchen.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
    /// Order being prepared.
    Preparing,
    /// Order handed to a rider.
    OutForDelivery,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Check if the order has reached its terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A coupon recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedCoupon {
    /// The code that was applied.
    pub code: String,
    /// Discount granted.
    pub discount: Money,
}

/// A timestamped status entry attached to an order for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingUpdate {
    /// Status at this point in the timeline.
    pub status: OrderStatus,
    /// Unix timestamp of the update.
    pub timestamp: i64,
    /// Where the order was (e.g., "Kitchen", "En Route").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Human-readable description.
    pub description: String,
}

impl TrackingUpdate {
    /// Create a tracking update.
    pub fn new(
        status: OrderStatus,
        timestamp: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status,
            timestamp,
            location: None,
            description: description.into(),
        }
    }

    /// Attach a location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A placed order.
///
/// Orders are created at the end of the checkout flow and never mutated by
/// the storefront afterwards, except for status updates fed in by the
/// (simulated) backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier (ORD-prefixed).
    pub id: OrderId,
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Snapshot of the cart lines at placement time.
    pub items: Vec<CartItem>,
    /// Payable total at placement time (subtotal + delivery fee).
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Booked delivery slot.
    pub delivery_slot: DeliverySlot,
    /// Delivery address.
    pub address: Address,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// Unix timestamp of placement.
    pub created_at: i64,
    /// Estimated delivery clock time, "HH:MM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<String>,
    /// Rider instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Coupon applied at checkout, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_applied: Option<AppliedCoupon>,
    /// Status timeline for display.
    pub tracking_updates: Vec<TrackingUpdate>,
}

impl Order {
    /// Build an order from the checkout selections and cart pricing.
    pub fn from_checkout(
        id: OrderId,
        user_id: UserId,
        items: Vec<CartItem>,
        pricing: &CartPricing,
        slot: DeliverySlot,
        address: Address,
        payment_method: PaymentMethod,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total: pricing.total,
            status: OrderStatus::Pending,
            delivery_slot: slot,
            address,
            payment_method,
            payment_status: PaymentStatus::Pending,
            created_at,
            estimated_delivery_time: None,
            special_instructions: None,
            coupon_applied: None,
            tracking_updates: Vec::new(),
        }
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Replace the status. Does not touch the tracking timeline.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Append a tracking update and move the status along with it.
    pub fn push_tracking(&mut self, update: TrackingUpdate) {
        self.status = update.status;
        self.tracking_updates.push(update);
    }

    /// The most recent tracking update.
    pub fn latest_update(&self) -> Option<&TrackingUpdate> {
        self.tracking_updates.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::AddressKind;
    use crate::cart::Cart;

    fn sample_order() -> Order {
        let mut cart = Cart::new();
        cart.add(Product::new(
            "prod-1",
            "Malabar Paratha",
            "",
            Money::rupees(35),
            "Breads",
            10,
        ));
        let pricing = cart.pricing().unwrap();
        Order::from_checkout(
            OrderId::new("ORDabc123xyz"),
            UserId::new("user-1"),
            cart.items.clone(),
            &pricing,
            DeliverySlot::new("slot-1", "10:00", "12:00"),
            Address::new(
                AddressKind::Home,
                "123 Main St",
                "Mumbai",
                "Maharashtra",
                "400001",
                "John Doe",
                "+91 9876543210",
            ),
            PaymentMethod::Cod,
            1_700_000_000,
        )
    }

    #[test]
    fn test_order_from_checkout() {
        let order = sample_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Money::rupees(75)); // 35 + 40 delivery
        assert_eq!(order.item_count(), 1);
    }

    #[test]
    fn test_push_tracking_moves_status() {
        let mut order = sample_order();
        order.push_tracking(
            TrackingUpdate::new(OrderStatus::Confirmed, 1_700_000_100, "Order confirmed")
                .at("Processing Center"),
        );
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.tracking_updates.len(), 1);
        assert_eq!(
            order.latest_update().unwrap().location.as_deref(),
            Some("Processing Center")
        );
    }
}
