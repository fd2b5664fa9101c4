//! Money type for representing monetary values.
//!
//! Amounts are stored as integers in the currency's display unit to avoid
//! floating-point precision issues. Menu prices on the storefront are whole
//! rupees, so INR carries zero decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    ///
    /// INR is priced in whole rupees on the storefront.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest unit of the currency.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a whole-rupee amount.
    pub fn rupees(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies don't match or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Cap this amount at the given maximum.
    pub fn min(&self, cap: &Money) -> Money {
        if self.currency == cap.currency && self.amount > cap.amount {
            *cap
        } else {
            *self
        }
    }

    /// Sum an iterator of Money values, failing on mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹35").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_display() {
        let m = Money::rupees(35);
        assert_eq!(m.display(), "\u{20b9}35");
    }

    #[test]
    fn test_usd_display() {
        let m = Money::new(499, Currency::USD);
        assert_eq!(m.display(), "$4.99");
    }

    #[test]
    fn test_try_add() {
        let a = Money::rupees(100);
        let b = Money::rupees(40);
        assert_eq!(a.try_add(&b), Some(Money::rupees(140)));
    }

    #[test]
    fn test_currency_mismatch() {
        let inr = Money::rupees(100);
        let usd = Money::new(100, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
    }

    #[test]
    fn test_overflow_detected() {
        let a = Money::rupees(i64::MAX);
        assert_eq!(a.try_add(&Money::rupees(1)), None);
        assert_eq!(a.try_multiply(2), None);
    }

    #[test]
    fn test_percentage() {
        let m = Money::rupees(500);
        assert_eq!(m.percentage(20.0), Money::rupees(100));
    }

    #[test]
    fn test_min_cap() {
        let m = Money::rupees(200);
        assert_eq!(m.min(&Money::rupees(150)), Money::rupees(150));
        assert_eq!(m.min(&Money::rupees(250)), Money::rupees(200));
    }

    #[test]
    fn test_try_sum() {
        let values = vec![Money::rupees(70), Money::rupees(30)];
        let total = Money::try_sum(values.iter(), Currency::INR);
        assert_eq!(total, Some(Money::rupees(100)));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
