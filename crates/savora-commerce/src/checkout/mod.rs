//! Checkout: addresses, delivery slots, payment methods, the checkout flow,
//! orders and delivery tracking.

mod address;
mod flow;
mod order;
mod payment;
mod slot;
mod tracking;

pub use address::{Address, AddressKind};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{AppliedCoupon, Order, OrderStatus, TrackingUpdate};
pub use payment::{PaymentMethod, PaymentStatus};
pub use slot::DeliverySlot;
pub use tracking::{progress_percent, stage_index, TRACKING_STAGES};
