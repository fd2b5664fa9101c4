//! Customer review types.

use crate::ids::{ReviewId, UserId};
use serde::{Deserialize, Serialize};

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Reviewing user.
    pub user_id: UserId,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Star rating (1 - 5).
    pub rating: u8,
    /// Review text.
    pub comment: String,
    /// Date string, as supplied by the backend.
    pub date: String,
    /// Helpful votes.
    pub likes: u32,
    /// Verified purchase.
    pub verified: bool,
}

impl Review {
    /// Create a new review.
    pub fn new(
        user_id: impl Into<UserId>,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: ReviewId::generate(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            rating: rating.min(5),
            comment: comment.into(),
            date: date.into(),
            likes: 0,
            verified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_capped_at_five() {
        let review = Review::new("user-1", "Asha", 9, "Great!", "2024-11-02");
        assert_eq!(review.rating, 5);
    }
}
