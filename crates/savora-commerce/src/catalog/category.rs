//! Category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Parent category, for nesting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    /// Shown on the home page.
    #[serde(default)]
    pub featured: bool,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            slug: slug.into(),
            parent_id: None,
            featured: false,
        }
    }
}
