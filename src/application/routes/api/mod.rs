pub(crate) mod books;
pub(crate) mod covers;

use axum::routing::get;

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/books", get(books::list_books))
        .route("/books/{id}", get(books::get_book))
        .route("/books/{id}/cover", get(books::get_book_cover))
        .route("/covers", get(covers::render_cover))
}
