//! Raw payload types for the bundled volumes document.
//!
//! These mirror the source JSON one-to-one; every field the source may omit
//! is an `Option`. The mapping into [`Book`] applies the fallback rules, so
//! downstream code never sees a partially-populated record.

use serde::{Deserialize, Serialize};

use shelf_model::Book;

/// Fallback description when neither the info block nor the search snippet
/// carries one.
pub const NO_DESCRIPTION: &str = "No description available";

/// Top-level volumes document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesPayload {
    #[serde(default)]
    pub kind: Option<String>,
    /// Total count advertised by the payload; may differ from `items.len()`.
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub items: Vec<VolumeRecord>,
}

/// One volume record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    #[serde(default)]
    pub kind: Option<String>,
    pub id: String,
    #[serde(default)]
    pub etag: Option<String>,
    pub volume_info: VolumeInfo,
    #[serde(default)]
    pub search_info: Option<SearchInfo>,
}

/// Nested info block of a volume record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<u32>,
}

/// Image references of a volume record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub small_thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Optional search-snippet block of a volume record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    #[serde(default)]
    pub text_snippet: Option<String>,
}

impl VolumeRecord {
    /// Normalize a raw record into a [`Book`].
    ///
    /// Fallbacks: description -> search snippet -> [`NO_DESCRIPTION`];
    /// missing lists become empty, missing counts become 0, optional fields
    /// stay absent.
    pub fn into_book(self) -> Book {
        let info = self.volume_info;
        let description = info
            .description
            .or_else(|| self.search_info.and_then(|s| s.text_snippet))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        Book {
            id: self.id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            description,
            published_date: info.published_date.unwrap_or_default(),
            page_count: info.page_count.unwrap_or(0),
            categories: info.categories.unwrap_or_default(),
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            publisher: info.publisher.unwrap_or_default(),
        }
    }
}
