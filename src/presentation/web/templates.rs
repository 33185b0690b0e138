use askama::Template;

use super::views::{BookCardView, CategoryTabView};

#[derive(Template)]
#[template(path = "pages/bookshelf.html")]
pub struct BookshelfTemplate {
    pub version: &'static str,
    pub tabs: Vec<CategoryTabView>,
    pub is_filtered: bool,
    pub books: Vec<BookCardView>,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
