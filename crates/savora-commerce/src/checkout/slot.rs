//! Delivery slot types.

use crate::ids::SlotId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A fixed delivery time window offered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliverySlot {
    /// Unique slot identifier.
    pub id: SlotId,
    /// Window start, "HH:MM".
    pub start_time: String,
    /// Window end, "HH:MM".
    pub end_time: String,
    /// Whether the slot is offered at all.
    pub available: bool,
    /// Capacity of the slot.
    pub max_orders: u32,
    /// Orders already booked into the slot.
    pub current_orders: u32,
    /// Surcharge for express slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    /// Express delivery slot.
    #[serde(default)]
    pub is_express: bool,
}

impl DeliverySlot {
    /// Create an available slot with default capacity.
    pub fn new(id: impl Into<SlotId>, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            available: true,
            max_orders: 50,
            current_orders: 0,
            price: None,
            is_express: false,
        }
    }

    /// Display window, e.g. "10:00 - 12:00".
    pub fn window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Check whether the slot is booked out.
    pub fn is_full(&self) -> bool {
        self.current_orders >= self.max_orders
    }

    /// Whether a customer may select this slot.
    pub fn is_selectable(&self) -> bool {
        self.available && !self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_display() {
        let slot = DeliverySlot::new("slot-1", "10:00", "12:00");
        assert_eq!(slot.window(), "10:00 - 12:00");
        assert!(slot.is_selectable());
    }

    #[test]
    fn test_unavailable_slot_not_selectable() {
        let mut slot = DeliverySlot::new("slot-3", "14:00", "16:00");
        slot.available = false;
        assert!(!slot.is_selectable());
    }

    #[test]
    fn test_full_slot_not_selectable() {
        let mut slot = DeliverySlot::new("slot-2", "12:00", "14:00");
        slot.max_orders = 10;
        slot.current_orders = 10;
        assert!(slot.is_full());
        assert!(!slot.is_selectable());
    }
}
