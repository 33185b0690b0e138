mod home;

use axum::response::IntoResponse;
use axum::routing::get;

use crate::application::state::AppState;

/// Generate a static asset handler that serves an embedded file with cache headers.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        async fn $name() -> impl IntoResponse {
            (
                [
                    ("content-type", $content_type),
                    ("cache-control", "public, max-age=604800"),
                ],
                include_str!($path),
            )
        }
    };
}

static_asset_str!(
    bookshelf_css,
    "../../../../static/bookshelf.css",
    "text/css; charset=utf-8"
);

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(home::bookshelf_page))
        .route("/static/bookshelf.css", get(bookshelf_css))
}
