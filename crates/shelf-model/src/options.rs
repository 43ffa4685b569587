//! Filter and sort selections for the book list.
//!
//! Both options are recorded in view state so presentation can reflect the
//! current selection. Applying them to the displayed list is deferred; the
//! setters deliberately leave the filtered subset untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShelfError;

/// Category filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOption {
    #[default]
    All,
    Fiction,
    NonFiction,
    Art,
    Science,
}

impl FilterOption {
    /// Display name for the selection.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Books",
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Art => "Art",
            Self::Science => "Science",
        }
    }

    /// All options in menu order.
    pub fn all() -> &'static [FilterOption] {
        &[
            Self::All,
            Self::Fiction,
            Self::NonFiction,
            Self::Art,
            Self::Science,
        ]
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterOption {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "fiction" => Ok(Self::Fiction),
            "non-fiction" | "nonfiction" => Ok(Self::NonFiction),
            "art" => Ok(Self::Art),
            "science" => Ok(Self::Science),
            _ => Err(ShelfError::UnknownFilter(value.to_string())),
        }
    }
}

/// Sort order selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    TitleAsc,
    TitleDesc,
    AuthorAsc,
    RatingDesc,
    PublishedDateDesc,
}

impl SortOption {
    /// Display name for the selection.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::AuthorAsc => "Author (A-Z)",
            Self::RatingDesc => "Rating (High to Low)",
            Self::PublishedDateDesc => "Newest First",
        }
    }

    /// All options in menu order.
    pub fn all() -> &'static [SortOption] {
        &[
            Self::TitleAsc,
            Self::TitleDesc,
            Self::AuthorAsc,
            Self::RatingDesc,
            Self::PublishedDateDesc,
        ]
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = ShelfError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "title-asc" | "title" => Ok(Self::TitleAsc),
            "title-desc" => Ok(Self::TitleDesc),
            "author-asc" | "author" => Ok(Self::AuthorAsc),
            "rating-desc" | "rating" => Ok(Self::RatingDesc),
            "published-desc" | "newest" => Ok(Self::PublishedDateDesc),
            _ => Err(ShelfError::UnknownSort(value.to_string())),
        }
    }
}
