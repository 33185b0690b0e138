use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use crate::application::errors::ApiError;
use crate::application::state::AppState;
use crate::domain::covers::{CoverArtifact, CoverRequest, SVG_CONTENT_TYPE};

/// Query parameters for an ad-hoc cover. Missing fields render as empty text.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CoverQuery {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    category: String,
}

impl CoverQuery {
    fn into_request(self) -> CoverRequest {
        CoverRequest::new(self.title, self.author, self.category)
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn render_cover(
    State(state): State<AppState>,
    Query(query): Query<CoverQuery>,
) -> Result<Response, ApiError> {
    let request = query.into_request().validate()?;
    debug!(category = %request.category(), "rendering cover");
    let cover = state.cover_service.cover(&request);
    Ok(svg_response(&cover))
}

pub(crate) fn svg_response(cover: &CoverArtifact) -> Response {
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        cover.as_str().to_string(),
    )
        .into_response()
}
