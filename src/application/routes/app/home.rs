use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::errors::{AppError, map_app_error};
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::covers::Category;
use crate::presentation::web::templates::BookshelfTemplate;
use crate::presentation::web::views::{BookCardView, CategoryTabView};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShelfQuery {
    category: Option<String>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn bookshelf_page(
    State(state): State<AppState>,
    Query(query): Query<ShelfQuery>,
) -> Result<Response, StatusCode> {
    // Unknown filters fall back to the full shelf.
    let active = query.category.as_deref().and_then(Category::known);

    let books = state
        .book_repo
        .list(active)
        .await
        .map_err(|e| map_app_error(AppError::from(e)))?;

    let cards: Vec<BookCardView> = books
        .into_iter()
        .map(|book| {
            let cover = state.cover_service.cover(&book.cover_request());
            BookCardView::from_domain(book, &cover)
        })
        .collect();

    let template = BookshelfTemplate {
        version: crate::VERSION,
        tabs: CategoryTabView::all(active),
        is_filtered: active.is_some(),
        books: cards,
    };

    render_html(template).map(IntoResponse::into_response)
}
