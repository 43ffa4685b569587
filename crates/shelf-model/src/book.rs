//! The normalized catalog record.
//!
//! A [`Book`] is produced once by the catalog source and never mutated
//! afterwards; the session engine owns the collection and presentation
//! layers receive clones.

use serde::{Deserialize, Serialize};

/// One book record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier from the source payload.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Author names; empty when the source record lists none.
    pub authors: Vec<String>,
    /// Description text, never empty (the source mapping supplies a fallback).
    pub description: String,
    /// Publication date as free text; never parsed.
    pub published_date: String,
    /// Page count, 0 = unknown.
    pub page_count: u32,
    /// Category labels; empty when the source record lists none.
    pub categories: Vec<String>,
    /// Thumbnail image reference, when the source provides one.
    pub thumbnail_url: Option<String>,
    /// Average rating, typically 0-5.
    pub average_rating: Option<f64>,
    /// Number of ratings behind `average_rating`.
    pub ratings_count: Option<u32>,
    /// Publisher name; empty when unknown.
    pub publisher: String,
}

impl Book {
    /// Authors joined for single-line display ("Unknown author" when empty).
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            "Unknown author".to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// Case-insensitive substring match against the title or any author name.
    ///
    /// A blank query matches every book.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        if self.title.to_lowercase().contains(&needle) {
            return true;
        }
        self.authors
            .iter()
            .any(|author| author.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, authors: &[&str]) -> Book {
        Book {
            id: "id".to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| (*a).to_string()).collect(),
            description: String::new(),
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
    fn matches_title_case_insensitively() {
        let b = book("The Pragmatic Programmer", &[]);
        assert!(b.matches_search("pragmatic"));
        assert!(b.matches_search("PRAGMATIC"));
        assert!(!b.matches_search("clean code"));
    }

    #[test]
    fn matches_any_author() {
        let b = book("Untitled", &["Jane Doe", "J. Smith"]);
        assert!(b.matches_search("smith"));
        assert!(b.matches_search("SmItH"));
        assert!(b.matches_search("doe"));
        assert!(!b.matches_search("zzz"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let b = book("Anything", &[]);
        assert!(b.matches_search(""));
        assert!(b.matches_search("   "));
    }

    #[test]
    fn author_line_falls_back_when_empty() {
        assert_eq!(book("T", &[]).author_line(), "Unknown author");
        assert_eq!(book("T", &["A", "B"]).author_line(), "A, B");
    }
}
