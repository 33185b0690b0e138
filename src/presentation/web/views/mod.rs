mod books;

pub use books::{BookCardView, CategoryTabView};

use crate::domain::covers::Category;
use crate::domain::ids::BookId;

pub(crate) fn book_cover_path(id: BookId) -> String {
    format!("/api/v1/books/{id}/cover")
}

pub(crate) fn shelf_path(category: Option<Category>) -> String {
    match category {
        Some(category) => format!("/?category={}", category.id()),
        None => "/".to_string(),
    }
}
