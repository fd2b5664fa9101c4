//! Canned catalog and account data served by the mock backend.

use savora_commerce::account::{Role, User};
use savora_commerce::cart::Cart;
use savora_commerce::catalog::{Category, NutritionalInfo, Product};
use savora_commerce::checkout::{
    Address, AddressKind, DeliverySlot, Order, OrderStatus, PaymentMethod, TrackingUpdate,
};
use savora_commerce::ids::OrderId;
use savora_commerce::money::Money;
use savora_commerce::offers::Offer;
use std::time::{SystemTime, UNIX_EPOCH};

fn rupees(n: i64) -> Money {
    Money::rupees(n)
}

/// The menu.
pub fn menu() -> Vec<Product> {
    let mut paratha = Product::new(
        "prod-1",
        "Malabar Paratha",
        "Flaky, layered flatbread from the Malabar coast",
        rupees(35),
        "breads",
        50,
    );
    paratha.rating = 4.6;
    paratha.preparation_time = Some(15);
    paratha.nutritional_info = Some(NutritionalInfo {
        calories: 260,
        protein: 5,
        carbs: 38,
        fat: 10,
    });

    let mut chai = Product::new(
        "prod-2",
        "Masala Chai",
        "Spiced tea brewed with milk and crushed cardamom",
        rupees(30),
        "beverages",
        100,
    );
    chai.rating = 4.8;
    chai.preparation_time = Some(5);

    let mut biryani = Product::new(
        "prod-3",
        "Chicken Biryani",
        "Fragrant basmati rice layered with spiced chicken",
        rupees(280),
        "mains",
        30,
    );
    biryani.rating = 4.7;
    biryani.discount = Some(10.0);
    biryani.preparation_time = Some(35);

    let mut dal = Product::new(
        "prod-4",
        "Dal Makhani",
        "Black lentils simmered overnight with butter and cream",
        rupees(220),
        "mains",
        40,
    );
    dal.rating = 4.5;

    let mut gulab = Product::new(
        "prod-5",
        "Gulab Jamun",
        "Soft milk dumplings soaked in rose-scented syrup",
        rupees(90),
        "desserts",
        60,
    );
    gulab.rating = 4.9;
    gulab.is_new = true;

    let mut thali = Product::new(
        "prod-6",
        "Family Thali",
        "A full spread for two: mains, breads, rice, and dessert",
        rupees(550),
        "mains",
        15,
    );
    thali.rating = 4.4;

    vec![paratha, chai, biryani, dal, gulab, thali]
}

/// Menu categories.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("cat-1", "Breads", "breads"),
        Category::new("cat-2", "Beverages", "beverages"),
        Category::new("cat-3", "Mains", "mains"),
        Category::new("cat-4", "Desserts", "desserts"),
    ]
}

/// Delivery slots offered at checkout. The 14:00 window is booked out.
pub fn delivery_slots() -> Vec<DeliverySlot> {
    let windows = [
        ("slot-1", "10:00", "12:00", true),
        ("slot-2", "12:00", "14:00", true),
        ("slot-3", "14:00", "16:00", false),
        ("slot-4", "16:00", "18:00", true),
        ("slot-5", "18:00", "20:00", true),
    ];
    windows
        .into_iter()
        .map(|(id, start, end, available)| {
            let mut slot = DeliverySlot::new(id, start, end);
            slot.available = available;
            slot
        })
        .collect()
}

/// Active discount offers.
pub fn offers() -> Vec<Offer> {
    // Windows are carried for display; application only checks the code.
    let year = 365 * 24 * 60 * 60;
    let from = 1_750_000_000;
    vec![
        Offer::percentage("WELCOME50", "50% off your first order", 50.0, from, from + year)
            .with_max_discount(rupees(150)),
        Offer::fixed("FEAST20", "Flat ₹20 off", rupees(20), from, from + year)
            .with_min_order(rupees(200)),
    ]
}

/// The demo account returned by mock login.
pub fn demo_user() -> User {
    let mut user = User::new("user-1", "demo@savora.app", "Demo User", Role::User);
    user.phone = Some("+91 9876543210".to_string());

    let mut home = Address::new(
        AddressKind::Home,
        "42 Lotus Apartments, MG Road",
        "Bengaluru",
        "Karnataka",
        "560001",
        "Demo User",
        "+91 9876543210",
    );
    home.is_default = true;
    let work = Address::new(
        AddressKind::Work,
        "7 Tech Park, Outer Ring Road",
        "Bengaluru",
        "Karnataka",
        "560103",
        "Demo User",
        "+91 9876543210",
    );
    user.addresses.push(home);
    user.addresses.push(work);
    user
}

/// A canned order for tracking views of ids this process never placed.
pub fn sample_order(id: OrderId) -> Order {
    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
        - 60;

    let mut cart = Cart::new();
    let mut items = menu().into_iter();
    if let Some(paratha) = items.next() {
        cart.add(paratha.clone());
        cart.add(paratha);
    }
    if let Some(chai) = items.next() {
        cart.add(chai);
    }

    let user = demo_user();
    let address = user
        .default_address()
        .cloned()
        .unwrap_or_else(|| {
            Address::new(
                AddressKind::Home,
                "42 Lotus Apartments, MG Road",
                "Bengaluru",
                "Karnataka",
                "560001",
                "Demo User",
                "+91 9876543210",
            )
        });

    let pricing = cart.pricing().unwrap_or(savora_commerce::cart::CartPricing {
        subtotal: rupees(0),
        delivery_fee: rupees(0),
        total: rupees(0),
        lines: Vec::new(),
    });
    let mut order = Order::from_checkout(
        id,
        user.id,
        cart.items.clone(),
        &pricing,
        delivery_slots().remove(0),
        address,
        PaymentMethod::Upi,
        created_at,
    );
    order.push_tracking(
        TrackingUpdate::new(
            OrderStatus::Confirmed,
            created_at,
            "Your order has been confirmed",
        )
        .at("Processing Center"),
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_storefront_staples() {
        let menu = menu();
        let paratha = menu.iter().find(|p| p.name == "Malabar Paratha").unwrap();
        assert_eq!(paratha.price, rupees(35));
        let chai = menu.iter().find(|p| p.name == "Masala Chai").unwrap();
        assert_eq!(chai.price, rupees(30));
    }

    #[test]
    fn test_menu_metadata_is_numeric() {
        let menu = menu();
        let paratha = menu.iter().find(|p| p.name == "Malabar Paratha").unwrap();
        assert_eq!(paratha.preparation_time, Some(15u32));

        let nutrition = paratha.nutritional_info.unwrap();
        assert_eq!(nutrition.calories, 260);
        assert_eq!((nutrition.protein, nutrition.carbs, nutrition.fat), (5, 38, 10));

        let chai = menu.iter().find(|p| p.name == "Masala Chai").unwrap();
        assert_eq!(chai.preparation_time, Some(5u32));
        let biryani = menu.iter().find(|p| p.name == "Chicken Biryani").unwrap();
        assert_eq!(biryani.preparation_time, Some(35u32));
    }

    #[test]
    fn test_one_slot_is_unavailable() {
        let slots = delivery_slots();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots.iter().filter(|s| !s.is_selectable()).count(), 1);
        assert!(!slots[2].available);
    }

    #[test]
    fn test_sample_order_is_trackable() {
        let order = sample_order(OrderId::new("ORDSAMPLE123"));
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert!(!order.items.is_empty());
    }
}
