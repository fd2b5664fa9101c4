//! Client-side product filtering and sorting.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }
}

/// Filter criteria applied to the product listing.
///
/// All fields are optional; an empty filter matches everything. Values are
/// replaced verbatim by the store's `set_filters`, with no validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Minimum price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Money>,
    /// Maximum price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Money>,
    /// Minimum rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    /// Only in-stock products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// Only new arrivals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    /// Only discounted products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_discount: Option<bool>,
}

impl ProductFilter {
    /// Check whether a single product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price.amount < min.amount {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price.amount > max.amount {
                return false;
            }
        }
        if let Some(rating) = self.rating {
            if product.rating < rating {
                return false;
            }
        }
        if self.in_stock == Some(true) && !product.is_in_stock() {
            return false;
        }
        if self.is_new == Some(true) && !product.is_new {
            return false;
        }
        if self.has_discount == Some(true) && product.discount.is_none() {
            return false;
        }
        true
    }

    /// Apply the filter and sort order to a product list.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort_by {
            Some(SortKey::PriceAsc) => result.sort_by_key(|p| p.price.amount),
            Some(SortKey::PriceDesc) => result.sort_by_key(|p| std::cmp::Reverse(p.price.amount)),
            Some(SortKey::Rating) => {
                result.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            Some(SortKey::Newest) => {
                // New arrivals first, original order otherwise.
                result.sort_by_key(|p| !p.is_new);
            }
            None => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        let mut idli = Product::new(
            "prod-1",
            "Idli Mix",
            "Stone-ground batter mix",
            Money::rupees(80),
            "Breakfast",
            10,
        );
        idli.rating = 4.5;

        let mut paratha = Product::new(
            "prod-2",
            "Malabar Paratha",
            "Flaky layered flatbread",
            Money::rupees(35),
            "Breads",
            0,
        );
        paratha.rating = 4.8;
        paratha.is_new = true;

        vec![idli, paratha]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = ProductFilter::default();
        assert_eq!(filter.apply(&products()).len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let filter = ProductFilter {
            category: Some("breads".to_string()),
            ..Default::default()
        };
        let result = filter.apply(&products());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Malabar Paratha");
    }

    #[test]
    fn test_price_range() {
        let filter = ProductFilter {
            min_price: Some(Money::rupees(50)),
            ..Default::default()
        };
        let result = filter.apply(&products());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Idli Mix");
    }

    #[test]
    fn test_in_stock_filter() {
        let filter = ProductFilter {
            in_stock: Some(true),
            ..Default::default()
        };
        let result = filter.apply(&products());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Idli Mix");
    }

    #[test]
    fn test_sort_price_asc() {
        let filter = ProductFilter {
            sort_by: Some(SortKey::PriceAsc),
            ..Default::default()
        };
        let result = filter.apply(&products());
        assert_eq!(result[0].name, "Malabar Paratha");
    }
}
