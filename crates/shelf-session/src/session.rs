//! The query/view-state engine.
//!
//! [`CatalogSession`] owns the view state and the injected catalog source.
//! The load runs on a background thread and posts its outcome over an mpsc
//! channel; callers drain it with [`CatalogSession::poll`] once per frame.
//! Everything else is synchronous and only touches the in-memory state.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use shelf_catalog::{CatalogError, CatalogSource};
use shelf_model::{Book, FilterOption, SortOption};

use crate::state::{BookListState, LoadPhase};

type LoadOutcome = Result<Vec<Book>, CatalogError>;

/// One list session over the catalog.
pub struct CatalogSession {
    source: Arc<dyn CatalogSource>,
    state: BookListState,
    /// Cloned into loader threads.
    outcome_sender: Sender<LoadOutcome>,
    /// Drained by `poll` on the caller's thread.
    outcome_receiver: Receiver<LoadOutcome>,
}

impl CatalogSession {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (outcome_sender, outcome_receiver) = channel();
        Self {
            source,
            state: BookListState::default(),
            outcome_sender,
            outcome_receiver,
        }
    }

    /// Current view state. Read-only; all changes go through the session.
    pub fn state(&self) -> &BookListState {
        &self.state
    }

    /// Start the catalog load on a background thread.
    ///
    /// Ignored while a load is already in flight. The outcome is applied on
    /// the next [`poll`](Self::poll) after the thread finishes.
    pub fn load(&mut self) {
        self.load_with_notify(|| {});
    }

    /// Like [`load`](Self::load), with a completion hook that runs on the
    /// loader thread after the outcome is posted. The GUI uses this to
    /// request a repaint so the next frame polls promptly.
    pub fn load_with_notify<F>(&mut self, notify: F)
    where
        F: Fn() + Send + 'static,
    {
        if !self.begin_load() {
            return;
        }
        let source = Arc::clone(&self.source);
        let sender = self.outcome_sender.clone();
        thread::spawn(move || {
            let outcome = source.load();
            // Receiver only disappears when the session is gone.
            let _ = sender.send(outcome);
            notify();
        });
    }

    /// Run the load inline, for headless callers with no event loop.
    ///
    /// Same transitions as the background path, applied before returning.
    pub fn load_blocking(&mut self) {
        if !self.begin_load() {
            return;
        }
        let outcome = self.source.load();
        self.apply_outcome(outcome);
    }

    /// Apply any pending load outcome. Returns true when state changed.
    ///
    /// Cheap when nothing is pending; safe to call every frame.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.apply_outcome(outcome);
            changed = true;
        }
        changed
    }

    /// Record the search text and recompute the filtered subset.
    ///
    /// Only meaningful once the catalog is loaded; a no-op in any other
    /// phase. Blank text restores the full collection. Idempotent.
    pub fn set_search_text(&mut self, text: &str) {
        if self.state.phase != LoadPhase::Ready {
            tracing::debug!(phase = ?self.state.phase, "ignoring search before catalog is ready");
            return;
        }
        self.state.search_query = text.to_string();
        self.state.filtered_books = filter_books(&self.state.books, text);
    }

    /// Reset the search text and show the full collection again.
    pub fn clear_search(&mut self) {
        self.set_search_text("");
    }

    /// Record the filter selection.
    ///
    /// Applying the filter to the subset is deferred; only the selection
    /// changes.
    pub fn set_filter(&mut self, filter: FilterOption) {
        self.state.selected_filter = filter;
    }

    /// Record the sort selection.
    ///
    /// Applying the order to the subset is deferred; only the selection
    /// changes.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.state.selected_sort = sort;
    }

    /// Transition into `Loading` unless a load is already in flight.
    fn begin_load(&mut self) -> bool {
        if self.state.phase == LoadPhase::Loading {
            tracing::debug!("load already in flight");
            return false;
        }
        self.state.phase = LoadPhase::Loading;
        self.state.error = None;
        true
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        match outcome {
            Ok(books) => {
                tracing::info!(count = books.len(), "catalog ready");
                self.state.filtered_books = filter_books(&books, &self.state.search_query);
                self.state.books = books;
                self.state.phase = LoadPhase::Ready;
                self.state.error = None;
            }
            Err(error) => {
                tracing::error!(%error, "catalog load failed");
                self.state.books = Vec::new();
                self.state.filtered_books = Vec::new();
                self.state.phase = LoadPhase::Failed;
                self.state.error = Some(format!("Failed to load books: {error}"));
            }
        }
    }
}

/// Items whose title or any author contains `query` case-insensitively.
/// Blank query keeps everything.
fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    if query.trim().is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|book| book.matches_search(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, authors: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| (*a).to_string()).collect(),
            description: "No description available".to_string(),
            published_date: String::new(),
            page_count: 0,
            categories: Vec::new(),
            thumbnail_url: None,
            average_rating: None,
            ratings_count: None,
            publisher: String::new(),
        }
    }

    #[test]
    fn filter_books_blank_query_returns_all() {
        let books = vec![book("1", "A", &[]), book("2", "B", &[])];
        assert_eq!(filter_books(&books, ""), books);
        assert_eq!(filter_books(&books, "  "), books);
    }

    #[test]
    fn filter_books_matches_title_or_author() {
        let books = vec![
            book("1", "Silent Spring", &["Rachel Carson"]),
            book("2", "Design Patterns", &["Erich Gamma", "Richard Helm"]),
        ];
        let by_title = filter_books(&books, "spring");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_author = filter_books(&books, "HELM");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, "2");

        assert!(filter_books(&books, "zzz").is_empty());
    }
}
