use crate::domain::book_items::Book;
use crate::domain::covers::{COVER_HEIGHT, COVER_WIDTH, Category, CoverArtifact};
use crate::domain::formatting::{format_price, format_ranking, format_rating, format_weeks};

use super::{book_cover_path, shelf_path};

pub struct BookCardView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category_id: &'static str,
    pub category_name: &'static str,
    pub ranking: String,
    pub weeks: String,
    pub rating: String,
    pub readers: String,
    pub price: String,
    pub cover_src: String,
    pub cover_path: String,
    pub cover_width: u32,
    pub cover_height: u32,
}

impl BookCardView {
    pub fn from_domain(book: Book, cover: &CoverArtifact) -> Self {
        let Book {
            id,
            title,
            author,
            category,
            ranking,
            weeks_on_list,
            rating,
            readers,
            price,
        } = book;

        Self {
            id: id.to_string(),
            cover_path: book_cover_path(id),
            title,
            author,
            category_id: category.id(),
            category_name: category.name(),
            ranking: format_ranking(ranking),
            weeks: format_weeks(weeks_on_list),
            rating: format_rating(rating),
            readers,
            price: format_price(price),
            cover_src: cover.to_data_uri(),
            cover_width: COVER_WIDTH,
            cover_height: COVER_HEIGHT,
        }
    }
}

pub struct CategoryTabView {
    pub label: &'static str,
    pub href: String,
    pub is_active: bool,
}

impl CategoryTabView {
    /// "All" followed by one tab per known category.
    pub fn all(active: Option<Category>) -> Vec<Self> {
        let mut tabs = vec![Self {
            label: "All",
            href: shelf_path(None),
            is_active: active.is_none(),
        }];
        tabs.extend(Category::KNOWN.into_iter().map(|category| Self {
            label: category.name(),
            href: shelf_path(Some(category)),
            is_active: active == Some(category),
        }));
        tabs
    }
}
