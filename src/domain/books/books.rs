use serde::{Deserialize, Serialize};

use crate::domain::covers::{Category, CoverRequest};
use crate::domain::ids::BookId;

/// A bestseller shown on the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    /// Position on the bestseller list, 1-based.
    pub ranking: u32,
    pub weeks_on_list: u32,
    pub rating: f64,
    /// Reader count as displayed, e.g. "2.1M".
    pub readers: String,
    pub price: f64,
}

impl Book {
    pub fn cover_request(&self) -> CoverRequest {
        CoverRequest::new(
            self.title.as_str(),
            self.author.as_str(),
            self.category.id(),
        )
    }
}
