pub mod book;
pub mod error;
pub mod options;

pub use book::Book;
pub use error::{Result, ShelfError};
pub use options::{FilterOption, SortOption};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes() {
        let book = Book {
            id: "abc123".to_string(),
            title: "The Rust Programming Language".to_string(),
            authors: vec!["Steve Klabnik".to_string(), "Carol Nichols".to_string()],
            description: "An introduction to Rust.".to_string(),
            published_date: "2019-08-06".to_string(),
            page_count: 560,
            categories: vec!["Computers".to_string()],
            thumbnail_url: None,
            average_rating: Some(4.5),
            ratings_count: Some(120),
            publisher: "No Starch Press".to_string(),
        };
        let json = serde_json::to_string(&book).expect("serialize book");
        let round: Book = serde_json::from_str(&json).expect("deserialize book");
        assert_eq!(round.id, "abc123");
        assert_eq!(round.authors.len(), 2);
        assert_eq!(round.average_rating, Some(4.5));
    }

    #[test]
    fn option_labels_are_stable() {
        assert_eq!(FilterOption::All.label(), "All Books");
        assert_eq!(SortOption::TitleAsc.label(), "Title (A-Z)");
    }
}
