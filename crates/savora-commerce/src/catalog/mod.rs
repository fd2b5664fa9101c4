//! Catalog: products, reviews, categories, and client-side filtering.

mod category;
mod filter;
mod product;
mod review;

pub use category::Category;
pub use filter::{ProductFilter, SortKey};
pub use product::{NutritionalInfo, Product};
pub use review::Review;
