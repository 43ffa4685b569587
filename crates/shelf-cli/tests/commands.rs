#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use shelf_cli::cli::{ListArgs, SearchArgs, ShowArgs};
use shelf_cli::commands::{run_list, run_search, run_show};
use shelf_cli::render::book_table;
use shelf_model::Book;

const PAYLOAD: &str = r#"{
  "totalItems": 2,
  "items": [
    {
      "id": "alpha",
      "volumeInfo": {
        "title": "A Wizard of Earthsea",
        "authors": ["Ursula K. Le Guin"],
        "publishedDate": "1968",
        "pageCount": 183
      }
    },
    {
      "id": "beta",
      "volumeInfo": {
        "title": "Untitled Collection",
        "authors": ["Jane Doe", "J. Smith"]
      }
    }
  ]
}"#;

fn write_payload(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("volumes.json");
    fs::write(&path, PAYLOAD).expect("write payload");
    path
}

fn list_args(extra: &[&str]) -> ListArgs {
    let mut argv = vec!["list"];
    argv.extend_from_slice(extra);
    ListArgs::parse_from(argv)
}

#[test]
fn list_succeeds_on_well_formed_payload() {
    let dir = TempDir::new().expect("temp dir");
    let payload = write_payload(&dir);
    run_list(&payload, &list_args(&[])).expect("list");
}

#[test]
fn list_accepts_filter_and_sort_flags() {
    let dir = TempDir::new().expect("temp dir");
    let payload = write_payload(&dir);
    let args = list_args(&["--filter", "science", "--sort", "rating-desc"]);
    run_list(&payload, &args).expect("list with flags");
}

#[test]
fn list_fails_with_message_when_payload_missing() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.json");
    let err = run_list(&missing, &list_args(&[])).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load books:"));
}

#[test]
fn list_fails_when_payload_is_malformed() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("volumes.json");
    fs::write(&path, "][").expect("write payload");
    let err = run_list(&path, &list_args(&[])).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load books:"));
}

#[test]
fn search_runs_for_matching_and_empty_results() {
    let dir = TempDir::new().expect("temp dir");
    let payload = write_payload(&dir);

    let matching = SearchArgs::parse_from(["search", "smith"]);
    run_search(&payload, &matching).expect("matching search");

    // No matches is a valid outcome, not an error.
    let empty = SearchArgs::parse_from(["search", "zzz"]);
    run_search(&payload, &empty).expect("empty search");
}

#[test]
fn show_finds_book_by_id() {
    let dir = TempDir::new().expect("temp dir");
    let payload = write_payload(&dir);
    let args = ShowArgs::parse_from(["show", "alpha"]);
    run_show(&payload, &args).expect("show");
}

#[test]
fn show_rejects_unknown_id() {
    let dir = TempDir::new().expect("temp dir");
    let payload = write_payload(&dir);
    let args = ShowArgs::parse_from(["show", "does-not-exist"]);
    let err = run_show(&payload, &args).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn book_table_renders_titles_and_fallbacks() {
    let books = vec![Book {
        id: "alpha".to_string(),
        title: "A Wizard of Earthsea".to_string(),
        authors: vec!["Ursula K. Le Guin".to_string()],
        description: "No description available".to_string(),
        published_date: String::new(),
        page_count: 0,
        categories: Vec::new(),
        thumbnail_url: None,
        average_rating: None,
        ratings_count: None,
        publisher: String::new(),
    }];
    let rendered = book_table(&books).to_string();
    assert!(rendered.contains("A Wizard of Earthsea"));
    assert!(rendered.contains("Le Guin"));
}
