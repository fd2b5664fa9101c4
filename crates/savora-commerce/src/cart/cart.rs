//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart: a product snapshot with a quantity.
///
/// Quantity is always >= 1; dropping below 1 removes the line entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Quantity (>= 1).
    pub quantity: u32,
}

impl CartItem {
    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity as i64)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart: an ordered list of line items, unique by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented by
    /// one; otherwise a new line is appended with quantity 1. Stock is not
    /// consulted.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product,
            quantity: 1,
        });
    }

    /// Remove a line by product id. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set a line's quantity directly, without clamping.
    ///
    /// Callers routing user input should use [`Cart::change_quantity`], which
    /// treats a quantity below 1 as removal. Returns whether a line matched.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Quantity-change handler: a new quantity below 1 removes the line.
    pub fn change_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            self.remove(product_id)
        } else {
            self.set_quantity(product_id, quantity as u32)
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total unit count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product id.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// The cart currency, taken from the first line (INR when empty).
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.product.price.currency)
            .unwrap_or_default()
    }

    /// Sum of line totals before delivery fee.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self.currency();
        let mut total = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total()?;
            total = total
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }
        Ok(total)
    }

    /// Full pricing breakdown: subtotal, delivery fee, payable total.
    ///
    /// Delivery is free above [`FREE_DELIVERY_THRESHOLD`], otherwise
    /// [`DELIVERY_FEE`] applies.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let currency = self.currency();
        let subtotal = self.subtotal()?;

        let delivery_fee = if subtotal.amount > FREE_DELIVERY_THRESHOLD {
            Money::zero(currency)
        } else {
            Money::new(DELIVERY_FEE, currency)
        };

        let total = subtotal
            .try_add(&delivery_fee)
            .ok_or(CommerceError::Overflow)?;

        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            lines.push(LinePricing {
                product_id: item.product.id.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                line_total: item.line_total()?,
            });
        }

        Ok(CartPricing {
            subtotal,
            delivery_fee,
            total,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: i64) -> Product {
        Product::new(id, name, "", Money::rupees(price), "Breads", 10)
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        cart.add(product("prod-1", "Malabar Paratha", 35));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_ignores_stock() {
        let mut zero_stock = product("prod-1", "Malabar Paratha", 35);
        zero_stock.stock = 0;
        let mut cart = Cart::new();
        cart.add(zero_stock.clone());
        cart.add(zero_stock);
        // Stock is informational only; the cart never caps quantity on it.
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        assert!(cart.remove(&ProductId::new("prod-1")));
        assert!(cart.is_empty());
        assert!(!cart.remove(&ProductId::new("prod-1")));
    }

    #[test]
    fn test_set_quantity_does_not_clamp() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        assert!(cart.set_quantity(&ProductId::new("prod-1"), 7));
        assert_eq!(cart.item_count(), 7);
        assert!(!cart.set_quantity(&ProductId::new("missing"), 3));
    }

    #[test]
    fn test_change_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        assert!(cart.change_quantity(&ProductId::new("prod-1"), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing_with_delivery_fee() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        cart.set_quantity(&ProductId::new("prod-1"), 2);
        cart.add(product("prod-2", "Ragi Dosa Mix", 30));

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.subtotal, Money::rupees(100));
        assert_eq!(pricing.delivery_fee, Money::rupees(40));
        assert_eq!(pricing.total, Money::rupees(140));
    }

    #[test]
    fn test_pricing_free_delivery_above_threshold() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Festive Hamper", 501));
        let pricing = cart.pricing().unwrap();
        assert!(pricing.delivery_fee.is_zero());
        assert_eq!(pricing.total, Money::rupees(501));
    }

    #[test]
    fn test_pricing_fee_applies_at_threshold_exactly() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Festive Hamper", 500));
        let pricing = cart.pricing().unwrap();
        // "Free above 500" is strict: exactly 500 still pays the fee.
        assert_eq!(pricing.delivery_fee, Money::rupees(40));
        assert_eq!(pricing.total, Money::rupees(540));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product("prod-1", "Malabar Paratha", 35));
        cart.clear();
        assert!(cart.is_empty());
    }
}
