//! Customer accounts.

use crate::checkout::Address;
use crate::ids::{ProductId, UserId};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Per-account preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Push notifications for order updates.
    pub notifications: bool,
    /// Marketing newsletter opt-in.
    pub newsletter: bool,
    /// Dietary restrictions used to filter the menu.
    pub dietary_restrictions: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            newsletter: false,
            dietary_restrictions: Vec::new(),
        }
    }
}

/// A signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Saved delivery addresses, in the order they were added.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Favorited products.
    #[serde(default)]
    pub favorites: Vec<ProductId>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            phone: None,
            role,
            addresses: Vec::new(),
            favorites: Vec::new(),
            preferences: UserPreferences::default(),
        }
    }

    /// The address marked default, falling back to the first saved one.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }

    pub fn add_favorite(&mut self, product_id: ProductId) {
        if !self.favorites.contains(&product_id) {
            self.favorites.push(product_id);
        }
    }

    pub fn remove_favorite(&mut self, product_id: &ProductId) {
        self.favorites.retain(|id| id != product_id);
    }

    pub fn is_favorite(&self, product_id: &ProductId) -> bool {
        self.favorites.contains(product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::AddressKind;

    fn user() -> User {
        User::new("user-1", "jane@example.com", "Jane Doe", Role::User)
    }

    #[test]
    fn test_default_address_prefers_flagged() {
        let mut u = user();
        assert!(u.default_address().is_none());

        u.addresses.push(Address::new(
            AddressKind::Home,
            "1 First St",
            "Mumbai",
            "Maharashtra",
            "400001",
            "Jane Doe",
            "+91 9000000001",
        ));
        let mut work = Address::new(
            AddressKind::Work,
            "2 Second St",
            "Mumbai",
            "Maharashtra",
            "400002",
            "Jane Doe",
            "+91 9000000001",
        );
        work.is_default = true;
        u.addresses.push(work);

        assert_eq!(u.default_address().map(|a| a.street.as_str()), Some("2 Second St"));
    }

    #[test]
    fn test_favorites_deduplicated() {
        let mut u = user();
        let id = ProductId::new("prod-1");
        u.add_favorite(id.clone());
        u.add_favorite(id.clone());
        assert_eq!(u.favorites.len(), 1);
        assert!(u.is_favorite(&id));

        u.remove_favorite(&id);
        assert!(!u.is_favorite(&id));
    }
}
