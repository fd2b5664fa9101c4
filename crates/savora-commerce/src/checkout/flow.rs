//! Checkout flow state machine.
//!
//! A linear wizard: address → delivery slot → payment → placing → done.
//! Invalid advances are rejected with a typed error rather than left to
//! disabled-button conventions in the UI layer.

use crate::account::User;
use crate::checkout::{Address, DeliverySlot, PaymentMethod};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Choosing a delivery address.
    AddressSelection,
    /// Choosing a delivery time slot.
    SlotSelection,
    /// Choosing a payment method.
    PaymentSelection,
    /// Order placement in flight.
    Placing,
    /// Order placed; checkout finished.
    Done,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::AddressSelection => "address",
            CheckoutStep::SlotSelection => "slot",
            CheckoutStep::PaymentSelection => "payment",
            CheckoutStep::Placing => "placing",
            CheckoutStep::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::AddressSelection => "Delivery Address",
            CheckoutStep::SlotSelection => "Delivery Time",
            CheckoutStep::PaymentSelection => "Payment",
            CheckoutStep::Placing => "Placing Order",
            CheckoutStep::Done => "Done",
        }
    }

    /// Get the step number (1-indexed, for the progress header).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::AddressSelection => 1,
            CheckoutStep::SlotSelection => 2,
            CheckoutStep::PaymentSelection => 3,
            CheckoutStep::Placing => 4,
            CheckoutStep::Done => 5,
        }
    }
}

/// Checkout wizard state: current step plus the per-step selections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Selected delivery address.
    pub selected_address: Option<Address>,
    /// Selected delivery slot.
    pub selected_slot: Option<DeliverySlot>,
    /// Selected payment method.
    pub selected_payment: Option<PaymentMethod>,
}

impl CheckoutFlow {
    /// Start a checkout with no selections.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::AddressSelection,
            selected_address: None,
            selected_slot: None,
            selected_payment: None,
        }
    }

    /// Start a checkout for a user, defaulting to their first address.
    pub fn for_user(user: &User) -> Self {
        let mut flow = Self::new();
        flow.selected_address = user.addresses.first().cloned();
        flow
    }

    /// Select the delivery address.
    pub fn select_address(&mut self, address: Address) {
        self.selected_address = Some(address);
    }

    /// Select a delivery slot.
    ///
    /// Unavailable or fully booked slots are rejected.
    pub fn select_slot(&mut self, slot: DeliverySlot) -> Result<(), CommerceError> {
        if !slot.is_selectable() {
            return Err(CommerceError::SlotUnavailable(slot.window()));
        }
        self.selected_slot = Some(slot);
        Ok(())
    }

    /// Select the payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.selected_payment = Some(method);
    }

    /// Check whether the current step's selection allows advancing.
    pub fn can_advance(&self) -> bool {
        match self.step {
            CheckoutStep::AddressSelection => self.selected_address.is_some(),
            CheckoutStep::SlotSelection => self.selected_slot.is_some(),
            CheckoutStep::PaymentSelection => self.selected_payment.is_some(),
            CheckoutStep::Placing | CheckoutStep::Done => false,
        }
    }

    /// Advance to the next step.
    ///
    /// Advancing from the payment step enters `Placing`; the caller then
    /// resolves placement with [`CheckoutFlow::complete`] or
    /// [`CheckoutFlow::fail_placement`].
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::AddressSelection => CheckoutStep::SlotSelection,
            CheckoutStep::SlotSelection => CheckoutStep::PaymentSelection,
            CheckoutStep::PaymentSelection => CheckoutStep::Placing,
            CheckoutStep::Placing | CheckoutStep::Done => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "next".to_string(),
                })
            }
        };

        if !self.can_advance() {
            return Err(CommerceError::SelectionMissing(
                self.missing_for_advance().join(", "),
            ));
        }

        self.step = next;
        Ok(next)
    }

    /// Go back one step (slot → address, payment → slot).
    pub fn back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::SlotSelection => CheckoutStep::AddressSelection,
            CheckoutStep::PaymentSelection => CheckoutStep::SlotSelection,
            CheckoutStep::AddressSelection | CheckoutStep::Placing | CheckoutStep::Done => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "back".to_string(),
                })
            }
        };

        self.step = prev;
        Ok(prev)
    }

    /// Mark placement as successful; finishes the flow.
    pub fn complete(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Placing {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Done.as_str().to_string(),
            });
        }
        self.step = CheckoutStep::Done;
        Ok(())
    }

    /// Placement failed: return to the payment step with selections intact.
    pub fn fail_placement(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Placing {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::PaymentSelection.as_str().to_string(),
            });
        }
        self.step = CheckoutStep::PaymentSelection;
        Ok(())
    }

    /// Check if checkout has finished.
    pub fn is_done(&self) -> bool {
        self.step == CheckoutStep::Done
    }

    /// What's missing to advance from the current step.
    pub fn missing_for_advance(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.step {
            CheckoutStep::AddressSelection => {
                if self.selected_address.is_none() {
                    missing.push("delivery address");
                }
            }
            CheckoutStep::SlotSelection => {
                if self.selected_slot.is_none() {
                    missing.push("delivery slot");
                }
            }
            CheckoutStep::PaymentSelection => {
                if self.selected_payment.is_none() {
                    missing.push("payment method");
                }
            }
            CheckoutStep::Placing | CheckoutStep::Done => {}
        }
        missing
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
