//! Product categories and the category selector used when browsing.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category or selector string is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0} (expected one of: all, games, apps)")]
pub struct CategoryParseError(pub String);

/// The category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Game top-ups and keys.
    Games,
    /// Software licences.
    Apps,
}

impl Category {
    /// Human-readable heading for the category page.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Apps => "Applications",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Games => write!(f, "games"),
            Self::Apps => write!(f, "apps"),
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "games" => Ok(Self::Games),
            "apps" => Ok(Self::Apps),
            _ => Err(CategoryParseError(s.to_owned())),
        }
    }
}

/// The active category selector: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if a product in `category` passes this selector.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}
