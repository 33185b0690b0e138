use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Definitions, LinearGradient, Rectangle, Stop, Text};

use super::category::Category;
use super::markup::xml_text;

pub const COVER_WIDTH: u32 = 240;
pub const COVER_HEIGHT: u32 = 320;
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const GRADIENT_ID: &str = "bookGrad";
const BADGE_LABEL: &str = "BESTSELLER";
const CAPTION: &str = "A Novel";

/// Accent bars drawn under the badge: (y, width, color).
const ACCENT_BARS: [(u32, u32, &str); 3] = [
    (70, 180, "#ff6b9d"),
    (80, 160, "#ffd93d"),
    (90, 140, "#6bcf7f"),
];

/// Inputs for a single cover. The category is kept as the raw identifier and
/// resolved when the cover is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverRequest {
    title: String,
    author: String,
    category: String,
}

impl CoverRequest {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category_id(&self) -> &str {
        &self.category
    }

    pub fn category(&self) -> Category {
        Category::from_id(&self.category)
    }
}

/// Generated SVG markup for a cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArtifact(String);

impl CoverArtifact {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// `data:` URI suitable for an `<img src>` attribute.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{SVG_CONTENT_TYPE};base64,{}",
            STANDARD.encode(self.0.as_bytes())
        )
    }
}

impl fmt::Display for CoverArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a title into two display lines: the first two words, then the rest.
pub fn split_title(title: &str) -> (String, String) {
    let mut words = title.split_whitespace();
    let first = words.by_ref().take(2).collect::<Vec<_>>().join(" ");
    let second = words.collect::<Vec<_>>().join(" ");
    (first, second)
}

/// Horizontally centered text. Markup characters are escaped by the text node.
fn centered_text(y: u32, content: &str) -> Text {
    Text::new(xml_text(content))
        .set("x", COVER_WIDTH / 2)
        .set("y", y)
        .set("text-anchor", "middle")
}

/// Render the cover for `request`. Total and deterministic: every input
/// produces well-formed markup and identical inputs produce identical bytes.
pub fn generate_cover(request: &CoverRequest) -> CoverArtifact {
    let scheme = request.category().color_scheme();
    let primary = scheme.primary.to_string();
    let (title_first, title_second) = split_title(request.title());

    let gradient = LinearGradient::new()
        .set("id", GRADIENT_ID)
        .set("x1", "0%")
        .set("y1", "0%")
        .set("x2", "100%")
        .set("y2", "100%")
        .add(
            Stop::new()
                .set("offset", "0%")
                .set("stop-color", primary.as_str())
                .set("stop-opacity", 1),
        )
        .add(
            Stop::new()
                .set("offset", "100%")
                .set("stop-color", scheme.secondary.to_string())
                .set("stop-opacity", 1),
        );

    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", (0, 0, COVER_WIDTH, COVER_HEIGHT))
        .set("width", COVER_WIDTH)
        .set("height", COVER_HEIGHT)
        .add(Definitions::new().add(gradient))
        .add(
            Rectangle::new()
                .set("width", COVER_WIDTH)
                .set("height", COVER_HEIGHT)
                .set("fill", format!("url(#{GRADIENT_ID})")),
        )
        .add(
            Rectangle::new()
                .set("x", 20)
                .set("y", 20)
                .set("width", 200)
                .set("height", 30)
                .set("fill", "white")
                .set("opacity", "0.9")
                .set("rx", 4),
        )
        .add(
            centered_text(40, BADGE_LABEL)
                .set("fill", primary.as_str())
                .set("font-size", 12)
                .set("font-weight", "bold")
                .set("font-family", "Inter"),
        );

    for (y, width, color) in ACCENT_BARS {
        document = document.add(
            Rectangle::new()
                .set("x", 30)
                .set("y", y)
                .set("width", width)
                .set("height", 2)
                .set("fill", color),
        );
    }

    for (y, line) in [(140, title_first.as_str()), (160, title_second.as_str())] {
        document = document.add(
            centered_text(y, line)
                .set("fill", "white")
                .set("font-size", 16)
                .set("font-family", "Georgia")
                .set("font-weight", "bold"),
        );
    }

    let document = document
        .add(
            centered_text(200, request.author())
                .set("fill", "white")
                .set("font-size", 10)
                .set("font-family", "Georgia")
                .set("opacity", "0.9"),
        )
        .add(
            Rectangle::new()
                .set("x", 30)
                .set("y", 240)
                .set("width", 180)
                .set("height", 1)
                .set("fill", "white")
                .set("opacity", "0.3"),
        )
        .add(
            centered_text(270, CAPTION)
                .set("fill", "white")
                .set("font-size", 8)
                .set("font-family", "Georgia")
                .set("opacity", "0.7"),
        );

    CoverArtifact(document.to_string())
}
