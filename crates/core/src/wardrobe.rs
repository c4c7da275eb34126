//! Wardrobe classification enums and filter parsing.
//!
//! Seasons and categories are stored as upper-case TEXT in the database
//! (`'TOP'`, `'WINTER'`, ...). Parsing is case-insensitive; anything else is
//! a validation error rather than being silently ignored.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Season tag on a wardrobe item, and the season a recommendation is for.
///
/// `All` marks a season-agnostic item and, as a request season, means
/// "the whole wardrobe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

impl Season {
    pub const VALUES: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::All,
    ];

    /// Parse a season name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            "WINTER" => Ok(Self::Winter),
            "ALL" => Ok(Self::All),
            _ => Err(CoreError::Validation(format!(
                "Invalid season '{name}'. Must be one of: SPRING, SUMMER, FALL, WINTER, ALL"
            ))),
        }
    }

    /// Database / wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
            Self::Winter => "WINTER",
            Self::All => "ALL",
        }
    }

    /// Whether an item tagged `item_season` is eligible for a request in `self`.
    ///
    /// A request for `All` accepts everything; any other request accepts
    /// items of the same season plus season-agnostic (`All`) items.
    pub fn includes(self, item_season: Season) -> bool {
        self == Season::All || item_season == self || item_season == Season::All
    }

    /// Whether the random fallback should dress the user in an outer layer.
    pub fn wants_outer(self) -> bool {
        matches!(self, Season::Fall | Season::Winter | Season::All)
    }
}

impl TryFrom<String> for Season {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Clothing category. Only tops, bottoms and outers take part in outfits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Category {
    Top,
    Bottom,
    Outer,
    Shoes,
}

impl Category {
    /// Parse a category name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "TOP" => Ok(Self::Top),
            "BOTTOM" => Ok(Self::Bottom),
            "OUTER" => Ok(Self::Outer),
            "SHOES" => Ok(Self::Shoes),
            _ => Err(CoreError::Validation(format!(
                "Invalid category '{name}'. Must be one of: TOP, BOTTOM, OUTER, SHOES"
            ))),
        }
    }

    /// Database / wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Outer => "OUTER",
            Self::Shoes => "SHOES",
        }
    }
}

impl TryFrom<String> for Category {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Listing filters
// ---------------------------------------------------------------------------

/// Parse an optional season filter from a query string.
///
/// Missing, empty and `ALL` mean "no filter". Unknown values are rejected.
pub fn parse_season_filter(raw: Option<&str>) -> Result<Option<Season>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match Season::from_name(value)? {
            Season::All => Ok(None),
            season => Ok(Some(season)),
        },
    }
}

/// Parse an optional category filter from a query string.
///
/// Missing, empty and `ALL` mean "no filter". Unknown values are rejected.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<Category>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("ALL") => Ok(None),
        Some(value) => Category::from_name(value).map(Some),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
