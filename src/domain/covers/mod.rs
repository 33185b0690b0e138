mod category;
mod generator;
mod markup;

pub use category::{Category, ColorScheme, HexColor};
pub use generator::{
    COVER_HEIGHT, COVER_WIDTH, CoverArtifact, CoverRequest, SVG_CONTENT_TYPE, generate_cover,
    split_title,
};

/// Longest title or author the HTTP layer accepts for ad-hoc covers.
pub const MAX_FIELD_CHARS: usize = 512;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoverError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CoverRequest {
    /// Reject fields longer than [`MAX_FIELD_CHARS`]. Generation itself never
    /// fails; this guards inputs arriving from outside the process.
    pub fn validate(self) -> Result<Self, CoverError> {
        for (field, value) in [
            ("title", self.title()),
            ("author", self.author()),
            ("category", self.category_id()),
        ] {
            let chars = value.chars().count();
            if chars > MAX_FIELD_CHARS {
                return Err(CoverError::InvalidInput {
                    field,
                    reason: format!("{chars} characters exceeds the limit of {MAX_FIELD_CHARS}"),
                });
            }
        }
        Ok(self)
    }
}
