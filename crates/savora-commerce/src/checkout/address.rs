//! Delivery address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// Kind of saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Home => "home",
            AddressKind::Work => "work",
            AddressKind::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AddressKind::Home => "Home",
            AddressKind::Work => "Work",
            AddressKind::Other => "Other",
        }
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Unique address identifier.
    pub id: AddressId,
    /// Kind of address.
    pub kind: AddressKind,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal pincode.
    pub pincode: String,
    /// Default address for the user.
    pub is_default: bool,
    /// Optional landmark hint for the rider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    /// Name of the person receiving the delivery.
    pub recipient_name: String,
    /// Contact phone of the recipient.
    pub recipient_phone: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        kind: AddressKind,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
        recipient_name: impl Into<String>,
        recipient_phone: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            kind,
            street: street.into(),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            is_default: false,
            landmark: None,
            recipient_name: recipient_name.into(),
            recipient_phone: recipient_phone.into(),
        }
    }

    /// Format as a single line, as shown on the checkout page.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.street, self.city, self.state, self.pincode
        )
    }

    /// Check that the fields a rider needs are all present.
    pub fn is_complete(&self) -> bool {
        !self.street.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.pincode.is_empty()
            && !self.recipient_name.is_empty()
            && !self.recipient_phone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line() {
        let addr = Address::new(
            AddressKind::Home,
            "123 Main St",
            "Mumbai",
            "Maharashtra",
            "400001",
            "John Doe",
            "+91 9876543210",
        );
        assert_eq!(addr.one_line(), "123 Main St, Mumbai, Maharashtra - 400001");
        assert!(addr.is_complete());
    }

    #[test]
    fn test_incomplete_address() {
        let mut addr = Address::new(
            AddressKind::Work,
            "",
            "Mumbai",
            "Maharashtra",
            "400001",
            "John Doe",
            "+91 9876543210",
        );
        assert!(!addr.is_complete());
        addr.street = "42 Marine Drive".to_string();
        assert!(addr.is_complete());
    }
}
