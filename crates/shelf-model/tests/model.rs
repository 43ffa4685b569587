#![allow(missing_docs)]

use shelf_model::{Book, FilterOption, SortOption};

fn sample_book() -> Book {
    Book {
        id: "zyTCAlFPjgYC".to_string(),
        title: "The Google Story".to_string(),
        authors: vec!["David A. Vise".to_string(), "Mark Malseed".to_string()],
        description: "The definitive account.".to_string(),
        published_date: "2005-11-15".to_string(),
        page_count: 207,
        categories: vec!["Business & Economics".to_string()],
        thumbnail_url: Some("http://books.example/thumb.jpg".to_string()),
        average_rating: Some(3.5),
        ratings_count: Some(136),
        publisher: "Random House Digital".to_string(),
    }
}

#[test]
fn search_matches_title_and_authors() {
    let book = sample_book();
    assert!(book.matches_search("google"));
    assert!(book.matches_search("VISE"));
    assert!(book.matches_search("malseed"));
    assert!(!book.matches_search("tolkien"));
}

#[test]
fn search_matches_partial_words() {
    let book = sample_book();
    assert!(book.matches_search("oogl"));
    assert!(book.matches_search("alse"));
}

#[test]
fn option_round_trips_through_labels() {
    for filter in FilterOption::all() {
        assert!(!filter.label().is_empty());
    }
    for sort in SortOption::all() {
        assert!(!sort.label().is_empty());
    }
}

#[test]
fn options_parse_from_cli_style_names() {
    assert_eq!(
        "nonfiction".parse::<FilterOption>().unwrap(),
        FilterOption::NonFiction
    );
    assert_eq!(
        "rating-desc".parse::<SortOption>().unwrap(),
        SortOption::RatingDesc
    );
    assert_eq!("newest".parse::<SortOption>().unwrap(), SortOption::PublishedDateDesc);
}
