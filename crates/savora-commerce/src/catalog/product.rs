//! Product types.

use crate::catalog::Review;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Nutritional metadata for a food product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionalInfo {
    /// Calories per serving.
    pub calories: u32,
    /// Protein in grams.
    pub protein: u32,
    /// Carbohydrates in grams.
    pub carbs: u32,
    /// Fat in grams.
    pub fat: u32,
}

/// A product in the catalog.
///
/// Reference data: sourced from the backend catalog and never mutated by
/// the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category name.
    pub category: String,
    /// Units in stock.
    pub stock: u32,
    /// Average rating (0.0 - 5.0).
    pub rating: f64,
    /// Customer reviews.
    pub reviews: Vec<Review>,
    /// Discount percentage, if on offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Newly added to the catalog.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    /// Ingredient list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Nutritional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
    /// Shelf life description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<String>,
    /// Storage instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_instructions: Option<String>,
}

impl Product {
    /// Create a new product with the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image: String::new(),
            category: category.into(),
            stock,
            rating: 0.0,
            reviews: Vec::new(),
            discount: None,
            is_new: false,
            ingredients: None,
            nutritional_info: None,
            preparation_time: None,
            shelf_life: None,
            storage_instructions: None,
        }
    }

    /// Check if the product has units in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price after any discount percentage, rounded to the nearest unit.
    pub fn effective_price(&self) -> Money {
        match self.discount {
            Some(percent) if percent > 0.0 => {
                let off = self.price.percentage(percent);
                self.price.try_subtract(&off).unwrap_or(self.price)
            }
            _ => self.price,
        }
    }

    /// Case-insensitive name substring match, as used by the search bar.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paratha() -> Product {
        Product::new(
            "prod-1",
            "Malabar Paratha",
            "Flaky layered flatbread",
            Money::rupees(35),
            "Breads",
            24,
        )
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let p = paratha();
        assert!(p.matches_query("malabar"));
        assert!(p.matches_query("PARA"));
        assert!(!p.matches_query("dosa"));
    }

    #[test]
    fn test_effective_price_with_discount() {
        let mut p = paratha();
        p.discount = Some(20.0);
        assert_eq!(p.effective_price(), Money::rupees(28));
    }

    #[test]
    fn test_effective_price_without_discount() {
        let p = paratha();
        assert_eq!(p.effective_price(), Money::rupees(35));
    }

    #[test]
    fn test_stock() {
        let mut p = paratha();
        assert!(p.is_in_stock());
        p.stock = 0;
        assert!(!p.is_in_stock());
    }
}
