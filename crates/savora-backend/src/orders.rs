//! Order placement and tracking service.
//!
//! The mock implementation keeps placed orders in memory and simulates
//! kitchen progress on fetch: an order's status advances along the
//! tracking timeline as wall-clock time passes since placement.

use crate::error::BackendError;
use crate::Latency;
use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use savora_commerce::cart::Cart;
use savora_commerce::checkout::{
    Address, DeliverySlot, Order, OrderStatus, PaymentMethod, TrackingUpdate,
};
use savora_commerce::ids::{OrderId, UserId};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Seconds after placement at which the mock kitchen reaches each stage.
const PREPARING_AFTER_SECS: i64 = 30;
const OUT_FOR_DELIVERY_AFTER_SECS: i64 = 120;
const DELIVERED_AFTER_SECS: i64 = 300;

fn now_ts() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Generate an order id: "ORD" followed by 9 random alphanumerics.
pub fn generate_order_id() -> OrderId {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    OrderId::new(format!("ORD{suffix}"))
}

/// Order backend.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Place an order from the checkout selections. Returns the full
    /// order record, already carrying its first tracking update.
    async fn place_order(
        &self,
        user_id: UserId,
        cart: &Cart,
        address: Address,
        slot: DeliverySlot,
        payment: PaymentMethod,
    ) -> Result<Order, BackendError>;

    /// Fetch an order by id, with its current tracking state.
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Order, BackendError>;
}

/// Mock order backend with in-memory storage and time-driven tracking.
///
/// Orders placed in another process are not visible here; fetching an
/// unknown id falls back to a canned sample order so the tracking view
/// always has something to show.
pub struct MockOrderService {
    latency: Latency,
    placed: Mutex<HashMap<OrderId, Order>>,
}

impl MockOrderService {
    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            placed: Mutex::new(HashMap::new()),
        }
    }

    /// Advance the order's tracking timeline according to the elapsed
    /// time since placement.
    fn progress(order: &mut Order, now: i64) {
        let elapsed = now - order.created_at;
        let stages = [
            (PREPARING_AFTER_SECS, OrderStatus::Preparing, "Kitchen", "Your food is being prepared"),
            (OUT_FOR_DELIVERY_AFTER_SECS, OrderStatus::OutForDelivery, "En Route", "Your order is on its way"),
            (DELIVERED_AFTER_SECS, OrderStatus::Delivered, "Delivered", "Enjoy your meal!"),
        ];
        for (after, status, location, description) in stages {
            if elapsed >= after && order.status < status {
                let update =
                    TrackingUpdate::new(status, order.created_at + after, description).at(location);
                order.push_tracking(update);
            }
        }
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn place_order(
        &self,
        user_id: UserId,
        cart: &Cart,
        address: Address,
        slot: DeliverySlot,
        payment: PaymentMethod,
    ) -> Result<Order, BackendError> {
        if cart.is_empty() {
            return Err(BackendError::OrderRejected("cart is empty".to_string()));
        }
        let pricing = cart.pricing()?;
        self.latency.wait().await;

        let created_at = now_ts();
        let mut order = Order::from_checkout(
            generate_order_id(),
            user_id,
            cart.items.clone(),
            &pricing,
            slot,
            address,
            payment,
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

        info!(order_id = %order.id, total = %order.total, "order placed");
        let mut placed = self.placed.lock().map_err(|_| {
            BackendError::OrderRejected("order storage poisoned".to_string())
        })?;
        placed.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn fetch_order(&self, order_id: &OrderId) -> Result<Order, BackendError> {
        self.latency.wait().await;

        let stored = {
            let placed = self.placed.lock().map_err(|_| {
                BackendError::OrderNotFound(order_id.to_string())
            })?;
            placed.get(order_id).cloned()
        };

        let mut order = match stored {
            Some(order) => order,
            // Tracking views for ids placed elsewhere get a sample order.
            None => crate::data::sample_order(order_id.clone()),
        };
        Self::progress(&mut order, now_ts());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use savora_commerce::checkout::AddressKind;

    fn checkout_parts() -> (Cart, Address, DeliverySlot) {
        let mut cart = Cart::new();
        for product in data::menu().into_iter().take(2) {
            cart.add(product);
        }
        let address = Address::new(
            AddressKind::Home,
            "123 Main St",
            "Mumbai",
            "Maharashtra",
            "400001",
            "Jane Doe",
            "+91 9876543210",
        );
        let slot = DeliverySlot::new("slot-1", "10:00", "12:00");
        (cart, address, slot)
    }

    #[test]
    fn test_order_id_shape() {
        let id = generate_order_id();
        let id = id.as_str();
        assert!(id.starts_with("ORD"));
        assert_eq!(id.len(), 12);
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_place_order_confirms_and_stores() {
        let service = MockOrderService::new(Latency::none());
        let (cart, address, slot) = checkout_parts();

        let order = service
            .place_order(
                UserId::new("user-1"),
                &cart,
                address,
                slot,
                PaymentMethod::Upi,
            )
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.tracking_updates.len(), 1);
        assert_eq!(order.total, cart.pricing().unwrap().total);

        let fetched = service.fetch_order(&order.id).await.unwrap();
        assert_eq!(fetched.id, order.id);
    }

    #[tokio::test]
    async fn test_place_order_rejects_empty_cart() {
        let service = MockOrderService::new(Latency::none());
        let (_, address, slot) = checkout_parts();

        let err = service
            .place_order(
                UserId::new("user-1"),
                &Cart::new(),
                address,
                slot,
                PaymentMethod::Cod,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::OrderRejected(_)));
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_returns_sample() {
        let service = MockOrderService::new(Latency::none());
        let order = service
            .fetch_order(&OrderId::new("ORDAAAAAAAAA"))
            .await
            .unwrap();
        assert_eq!(order.id.as_str(), "ORDAAAAAAAAA");
        assert!(!order.tracking_updates.is_empty());
    }

    #[test]
    fn test_progress_advances_with_time() {
        let (cart, address, slot) = checkout_parts();
        let pricing = cart.pricing().unwrap();
        let mut order = Order::from_checkout(
            generate_order_id(),
            UserId::new("user-1"),
            cart.items.clone(),
            &pricing,
            slot,
            address,
            PaymentMethod::Card,
            1_000,
        );
        order.push_tracking(TrackingUpdate::new(
            OrderStatus::Confirmed,
            1_000,
            "Your order has been confirmed",
        ));

        MockOrderService::progress(&mut order, 1_000 + 31);
        assert_eq!(order.status, OrderStatus::Preparing);

        MockOrderService::progress(&mut order, 1_000 + DELIVERED_AFTER_SECS);
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.tracking_updates.len(), 4);
    }
}
