use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::application::errors::ApiError;
use crate::application::routes::api::covers::svg_response;
use crate::application::state::AppState;
use crate::domain::book_items::Book;
use crate::domain::covers::Category;
use crate::domain::ids::BookId;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BookListQuery {
    category: Option<String>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let category = query.category.as_deref().map(Category::from_id);
    let books = state.book_repo.list(category).await?;
    Ok(Json(books))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, ApiError> {
    let book = state.book_repo.get(id).await?;
    Ok(Json(book))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn get_book_cover(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Response, ApiError> {
    let book = state.book_repo.get(id).await?;
    let cover = state.cover_service.cover(&book.cover_request());
    Ok(svg_response(&cover))
}
