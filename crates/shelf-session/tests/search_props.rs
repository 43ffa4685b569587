#![allow(missing_docs)]

//! Property tests for the search filter: the subset relation and the
//! match condition hold for arbitrary catalogs and queries.

use std::sync::Arc;

use proptest::prelude::*;

use shelf_catalog::{CatalogError, CatalogSource};
use shelf_model::Book;
use shelf_session::{CatalogSession, LoadPhase};

struct FixedSource {
    books: Vec<Book>,
}

impl CatalogSource for FixedSource {
    fn load(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.clone())
    }
}

fn book_strategy() -> impl Strategy<Value = Book> {
    (
        "[a-z0-9]{1,10}",
        "[A-Za-z ]{0,24}",
        prop::collection::vec("[A-Za-z. ]{1,16}", 0..3),
    )
        .prop_map(|(id, title, authors)| Book {
            id,
            title,
            authors,
            description: "No description available".to_string(),
            published_date: String::new(),
            page_count: 0,
            categories: Vec::new(),
            thumbnail_url: None,
            average_rating: None,
            ratings_count: None,
            publisher: String::new(),
        })
}

fn ready_session(books: Vec<Book>) -> CatalogSession {
    let mut session = CatalogSession::new(Arc::new(FixedSource { books }));
    session.load_blocking();
    assert_eq!(session.state().phase, LoadPhase::Ready);
    session
}

proptest! {
    #[test]
    fn filtered_is_a_matching_subset(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[A-Za-z ]{0,8}",
    ) {
        let mut session = ready_session(books.clone());
        session.set_search_text(&query);
        let state = session.state();

        // Subset of the full collection.
        for item in &state.filtered_books {
            prop_assert!(state.books.contains(item));
        }
        // Every member actually matches.
        for item in &state.filtered_books {
            prop_assert!(item.matches_search(&query));
        }
        // No matching item is left out.
        let expected = books.iter().filter(|b| b.matches_search(&query)).count();
        prop_assert_eq!(state.filtered_books.len(), expected);
    }

    #[test]
    fn blank_query_yields_full_collection(
        books in prop::collection::vec(book_strategy(), 0..20),
        blanks in " {0,4}",
    ) {
        let mut session = ready_session(books.clone());
        session.set_search_text(&blanks);
        prop_assert_eq!(&session.state().filtered_books, &books);
    }

    #[test]
    fn search_is_idempotent(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[A-Za-z ]{0,8}",
    ) {
        let mut session = ready_session(books);
        session.set_search_text(&query);
        let first = session.state().clone();
        session.set_search_text(&query);
        prop_assert_eq!(session.state(), &first);
    }
}
