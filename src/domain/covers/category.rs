use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB color rendered as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// The two gradient stops a category's cover is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    pub primary: HexColor,
    pub secondary: HexColor,
}

impl ColorScheme {
    pub const FICTION: Self = Self {
        primary: HexColor::new(0x4a, 0x6f, 0xa5),
        secondary: HexColor::new(0x5d, 0x7b, 0xb5),
    };

    pub const ROMANCE: Self = Self {
        primary: HexColor::new(0x66, 0x7e, 0xea),
        secondary: HexColor::new(0x76, 0x4b, 0xa2),
    };

    pub const MYSTERY: Self = Self {
        primary: HexColor::new(0x56, 0xab, 0x2f),
        secondary: HexColor::new(0xa8, 0xe6, 0xcf),
    };
}

/// Book genre a cover is styled by.
///
/// Identifiers outside the known set resolve to [`Category::Unrecognized`],
/// which is painted with the romance scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fiction,
    Romance,
    Mystery,
    #[serde(other)]
    Unrecognized,
}

impl Category {
    pub const KNOWN: [Category; 3] = [Category::Fiction, Category::Romance, Category::Mystery];

    /// Resolve a category identifier. Matching is exact; anything else is
    /// `Unrecognized`.
    pub fn from_id(id: &str) -> Self {
        match id {
            "fiction" => Category::Fiction,
            "romance" => Category::Romance,
            "mystery" => Category::Mystery,
            _ => Category::Unrecognized,
        }
    }

    /// Like [`Category::from_id`] but `None` for unknown identifiers.
    pub fn known(id: &str) -> Option<Self> {
        match Self::from_id(id) {
            Category::Unrecognized => None,
            category => Some(category),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Fiction => "fiction",
            Category::Romance => "romance",
            Category::Mystery => "mystery",
            Category::Unrecognized => "unrecognized",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Romance => "Romance",
            Category::Mystery => "Mystery",
            Category::Unrecognized => "Other",
        }
    }

    pub fn color_scheme(self) -> ColorScheme {
        match self {
            Category::Fiction => ColorScheme::FICTION,
            Category::Romance => ColorScheme::ROMANCE,
            Category::Mystery => ColorScheme::MYSTERY,
            Category::Unrecognized => ColorScheme::ROMANCE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
