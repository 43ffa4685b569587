//! View state for the book list session.
//!
//! One `BookListState` exists per session. Presentation only reads it; every
//! change goes through [`crate::CatalogSession`], which is the single writer.

use shelf_model::{Book, FilterOption, SortOption};

/// Lifecycle of the one-time catalog load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load attempted yet.
    #[default]
    Idle,
    /// Background load in flight.
    Loading,
    /// Catalog loaded; list operations are live.
    Ready,
    /// Load failed; `error` carries the user-facing message.
    Failed,
}

/// The single source of truth consumed by presentation.
///
/// Invariant: `filtered_books` is always the subset of `books` matching
/// `search_query`; an empty query means the two are equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookListState {
    /// Full collection, owned by the session after a successful load.
    pub books: Vec<Book>,
    /// Derived subset currently shown.
    pub filtered_books: Vec<Book>,
    /// Load lifecycle.
    pub phase: LoadPhase,
    /// Current search text.
    pub search_query: String,
    /// Selected filter; recorded for display, not applied to the subset.
    pub selected_filter: FilterOption,
    /// Selected sort; recorded for display, not applied to the subset.
    pub selected_sort: SortOption,
    /// User-facing error message when the load failed.
    pub error: Option<String>,
}

impl BookListState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }
}
