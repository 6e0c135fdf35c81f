//! Customer reviews shown alongside offerings.

use serde::{Deserialize, Serialize};

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    /// Reviewer initials.
    pub author: String,
    /// Relative age as authored (e.g., "4 months ago").
    pub ago: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
}

impl Review {
    /// Render the rating as a row of stars.
    pub fn stars(&self) -> String {
        "\u{2605}".repeat(usize::from(self.rating.min(MAX_RATING)))
    }
}
