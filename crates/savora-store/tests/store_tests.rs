//! Integration tests for the persisted store: the full storefront
//! behaviors end to end, including snapshot rehydration across reopens.

use savora_commerce::money::Money;
use savora_commerce::account::{Role, User};
use savora_commerce::catalog::Product;
use savora_commerce::ids::ProductId;
use savora_commerce::offers::Offer;
use savora_store::{Store, Theme};

fn product(id: &str, name: &str, rupees: i64) -> Product {
    Product::new(id, name, "", Money::rupees(rupees), "breads", 20)
}

#[test]
fn cart_pricing_matches_storefront_rules() {
    let mut store = Store::in_memory();
    let paratha = product("prod-1", "Malabar Paratha", 35);
    store.add_to_cart(paratha.clone()).unwrap();
    store.add_to_cart(paratha).unwrap();
    store.add_to_cart(product("prod-2", "Masala Chai", 30)).unwrap();

    let pricing = store.state().cart.pricing().unwrap();
    assert_eq!(pricing.subtotal, Money::rupees(100));
    assert_eq!(pricing.delivery_fee, Money::rupees(40));
    assert_eq!(pricing.total, Money::rupees(140));
}

#[test]
fn large_orders_get_free_delivery() {
    let mut store = Store::in_memory();
    store.add_to_cart(product("prod-1", "Family Feast", 501)).unwrap();

    let pricing = store.state().cart.pricing().unwrap();
    assert_eq!(pricing.delivery_fee, Money::rupees(0));
    assert_eq!(pricing.total, Money::rupees(501));
}

#[test]
fn cart_theme_and_user_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut store = Store::open(&path).unwrap();
        store.add_to_cart(product("prod-1", "Malabar Paratha", 35)).unwrap();
        store.toggle_theme().unwrap();
        store
            .set_user(Some(User::new("user-1", "jane@example.com", "Jane", Role::User)))
            .unwrap();
        store.set_search_query("paratha").unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(store.state().cart.item_count(), 1);
    assert_eq!(store.state().theme, Theme::Dark);
    assert!(store.state().user.is_some());
    // Search is session-local and does not survive.
    assert!(store.state().search_query.is_empty());
}

#[test]
fn logout_keeps_cart_and_theme_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = Store::open(&path).unwrap();
    store.add_to_cart(product("prod-1", "Malabar Paratha", 35)).unwrap();
    store.toggle_theme().unwrap();
    store
        .set_user(Some(User::new("user-1", "jane@example.com", "Jane", Role::User)))
        .unwrap();
    store.set_user(None).unwrap();
    drop(store);

    let store = Store::open(&path).unwrap();
    assert!(store.state().user.is_none());
    assert_eq!(store.state().cart.item_count(), 1);
    assert_eq!(store.state().theme, Theme::Dark);
}

#[test]
fn apply_offer_checks_existence_only() {
    let mut store = Store::in_memory();
    store
        .set_offers(vec![
            Offer::percentage("WELCOME50", "Welcome offer", 50.0, 0, i64::MAX),
            Offer::fixed("FEAST20", "Feast discount", Money::rupees(20), 0, i64::MAX),
        ])
        .unwrap();

    assert!(store.apply_offer("WELCOME50"));
    assert!(store.apply_offer("FEAST20"));
    assert!(!store.apply_offer("UNKNOWN"));
}

#[test]
fn favorites_require_a_user() {
    let mut store = Store::in_memory();
    let id = ProductId::new("prod-1");

    store.add_to_favorites(id.clone()).unwrap();
    assert!(store.state().user.is_none());

    store
        .set_user(Some(User::new("user-1", "jane@example.com", "Jane", Role::User)))
        .unwrap();
    store.add_to_favorites(id.clone()).unwrap();
    assert!(store.state().user.as_ref().unwrap().is_favorite(&id));

    store.remove_from_favorites(&id).unwrap();
    assert!(!store.state().user.as_ref().unwrap().is_favorite(&id));
}
