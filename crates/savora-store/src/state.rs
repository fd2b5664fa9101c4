//! The application state object and its transitions.
//!
//! All mutation goes through the methods here. Each operation is a
//! synchronous, atomic update of the full state object; reads made after
//! an operation returns always observe its effect.

use savora_commerce::account::{User, UserPreferences};
use savora_commerce::cart::Cart;
use savora_commerce::catalog::{Product, ProductFilter};
use savora_commerce::checkout::{Order, OrderStatus};
use savora_commerce::ids::{OrderId, ProductId};
use savora_commerce::offers::Offer;
use serde::{Deserialize, Serialize};

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Flip light to dark and back.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// The full client-observable application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// Shopping cart.
    pub cart: Cart,
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// UI theme.
    pub theme: Theme,
    /// Free-text product search.
    pub search_query: String,
    /// Catalog filters.
    pub filters: ProductFilter,
    /// Orders placed during this session.
    pub orders: Vec<Order>,
    /// Known discount offers.
    pub offers: Vec<Offer>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    // Cart ---------------------------------------------------------------

    /// Add a product to the cart: increments quantity if the product is
    /// already present, otherwise appends a new line with quantity 1.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
    }

    /// Remove a product's line from the cart. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    /// Set a line's quantity directly. The quantity is not clamped here;
    /// callers route quantities below 1 through [`StoreState::change_quantity`]
    /// or [`StoreState::remove_from_cart`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Set a quantity from a UI stepper, removing the line when it drops
    /// below 1.
    pub fn change_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.cart.change_quantity(product_id, quantity);
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // User ---------------------------------------------------------------

    /// Replace the user wholesale. `None` means logged out; cart and theme
    /// are untouched either way.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Add a product to the user's favorites. No-op when signed out.
    pub fn add_to_favorites(&mut self, product_id: ProductId) {
        if let Some(user) = self.user.as_mut() {
            user.add_favorite(product_id);
        }
    }

    /// Remove a product from the user's favorites. No-op when signed out.
    pub fn remove_from_favorites(&mut self, product_id: &ProductId) {
        if let Some(user) = self.user.as_mut() {
            user.remove_favorite(product_id);
        }
    }

    /// Replace the user's preferences. No-op when signed out.
    pub fn update_user_preferences(&mut self, preferences: UserPreferences) {
        if let Some(user) = self.user.as_mut() {
            user.preferences = preferences;
        }
    }

    // Theme / search -----------------------------------------------------

    /// Flip light to dark and back.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Replace the search query verbatim.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Replace the catalog filters verbatim.
    pub fn set_filters(&mut self, filters: ProductFilter) {
        self.filters = filters;
    }

    // Orders -------------------------------------------------------------

    /// Append an order to the session's order list.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Update the status of an order. No-op if the id is unknown.
    pub fn update_order_status(&mut self, order_id: &OrderId, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|o| &o.id == order_id) {
            order.set_status(status);
        }
    }

    /// Look up an order by id.
    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    // Offers -------------------------------------------------------------

    /// Replace the known offers.
    pub fn set_offers(&mut self, offers: Vec<Offer>) {
        self.offers = offers;
    }

    /// Apply an offer code. Returns whether the code matched a known offer;
    /// the match is by code only. Validity windows, minimum order values and
    /// usage limits are carried on [`Offer`] but not checked here.
    pub fn apply_offer(&self, code: &str) -> bool {
        self.offers.iter().any(|o| o.code.eq_ignore_ascii_case(code))
    }

    /// Look up an offer by code.
    pub fn offer(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savora_commerce::money::Money;

    fn product(id: &str, name: &str, rupees: i64) -> Product {
        Product::new(id, name, "", Money::rupees(rupees), "breads", 20)
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut state = StoreState::new();
        let paratha = product("prod-1", "Malabar Paratha", 35);
        state.add_to_cart(paratha.clone());
        state.add_to_cart(paratha);

        assert_eq!(state.cart.unique_item_count(), 1);
        assert_eq!(state.cart.items[0].quantity, 2);
    }

    #[test]
    fn test_quantity_below_one_removes_line() {
        let mut state = StoreState::new();
        state.add_to_cart(product("prod-1", "Malabar Paratha", 35));
        state.change_quantity(&ProductId::new("prod-1"), 0);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = StoreState::new();
        let original = state.theme;
        state.toggle_theme();
        assert_ne!(state.theme, original);
        state.toggle_theme();
        assert_eq!(state.theme, original);
    }

    #[test]
    fn test_apply_offer_unknown_is_false() {
        let mut state = StoreState::new();
        state.set_offers(vec![Offer::percentage(
            "WELCOME50",
            "Welcome offer",
            50.0,
            0,
            i64::MAX,
        )]);

        assert!(!state.apply_offer("UNKNOWN"));
        assert!(state.apply_offer("WELCOME50"));
        assert!(state.apply_offer("welcome50"));
    }

    #[test]
    fn test_logout_leaves_cart_and_theme() {
        use savora_commerce::account::{Role, User};

        let mut state = StoreState::new();
        state.add_to_cart(product("prod-1", "Malabar Paratha", 35));
        state.toggle_theme();
        state.set_user(Some(User::new("user-1", "a@b.com", "A", Role::User)));

        state.set_user(None);
        assert!(state.user.is_none());
        assert_eq!(state.cart.item_count(), 1);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_update_user_preferences() {
        use savora_commerce::account::{Role, User, UserPreferences};

        let mut state = StoreState::new();
        let prefs = UserPreferences {
            notifications: false,
            newsletter: true,
            dietary_restrictions: vec!["vegetarian".to_string()],
        };

        // Signed out: nothing to update.
        state.update_user_preferences(prefs.clone());
        assert!(state.user.is_none());

        state.set_user(Some(User::new("user-1", "a@b.com", "A", Role::User)));
        state.update_user_preferences(prefs.clone());
        assert_eq!(state.user.as_ref().unwrap().preferences, prefs);
    }

    #[test]
    fn test_favorites_noop_when_signed_out() {
        let mut state = StoreState::new();
        state.add_to_favorites(ProductId::new("prod-1"));
        assert!(state.user.is_none());
    }

    #[test]
    fn test_update_order_status() {
        use savora_commerce::cart::Cart;
        use savora_commerce::checkout::{
            Address, AddressKind, DeliverySlot, Order, PaymentMethod,
        };

        let mut state = StoreState::new();
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        let pricing = cart.pricing().unwrap();
        let order = Order::from_checkout(
            OrderId::new("ORD123456789"),
            savora_commerce::ids::UserId::new("user-1"),
            cart.items.clone(),
            &pricing,
            DeliverySlot::new("slot-1", "10:00", "12:00"),
            Address::new(
                AddressKind::Home,
                "1 First St",
                "Mumbai",
                "Maharashtra",
                "400001",
                "A",
                "+91 9000000001",
            ),
            PaymentMethod::Cod,
            0,
        );
        state.add_order(order);

        state.update_order_status(&OrderId::new("ORD123456789"), OrderStatus::Preparing);
        assert_eq!(
            state.order(&OrderId::new("ORD123456789")).unwrap().status,
            OrderStatus::Preparing
        );

        // Unknown id is a no-op.
        state.update_order_status(&OrderId::new("ORD000000000"), OrderStatus::Delivered);
    }
}
