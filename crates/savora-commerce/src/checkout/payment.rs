//! Payment method and status types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cod,
    /// UPI transfer.
    Upi,
    /// Credit/debit card.
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }

    /// All methods, in checkout display order.
    pub fn all() -> [PaymentMethod; 3] {
        [PaymentMethod::Cod, PaymentMethod::Upi, PaymentMethod::Card]
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cod" => Ok(PaymentMethod::Cod),
            "upi" => Ok(PaymentMethod::Upi),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(()),
        }
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment pending (always the case for cash on delivery).
    #[default]
    Pending,
    /// Payment completed.
    Completed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for method in PaymentMethod::all() {
            assert_eq!(method.as_str().parse(), Ok(method));
        }
        assert!("netbanking".parse::<PaymentMethod>().is_err());
    }
}
