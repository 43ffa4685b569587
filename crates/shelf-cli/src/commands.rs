//! Command implementations.
//!
//! Each command builds a list session over the payload, runs the load
//! inline, and renders from the resulting view state.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use tracing::info_span;

use shelf_catalog::FileCatalogSource;
use shelf_model::Book;
use shelf_session::{CatalogSession, LoadPhase};

use crate::cli::{ListArgs, SearchArgs, ShowArgs};
use crate::render::{print_book_details, print_book_list};

pub fn run_list(payload: &Path, args: &ListArgs) -> Result<()> {
    let span = info_span!("list");
    let _guard = span.enter();
    let mut session = load_session(payload)?;
    session.set_filter(args.filter.into());
    session.set_sort(args.sort.into());
    print_book_list(session.state());
    Ok(())
}

pub fn run_search(payload: &Path, args: &SearchArgs) -> Result<()> {
    let span = info_span!("search", text = %args.text);
    let _guard = span.enter();
    let mut session = load_session(payload)?;
    session.set_filter(args.filter.into());
    session.set_sort(args.sort.into());
    session.set_search_text(&args.text);
    print_book_list(session.state());
    Ok(())
}

pub fn run_show(payload: &Path, args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", id = %args.id);
    let _guard = span.enter();
    let session = load_session(payload)?;
    let book = find_book(&session, &args.id)
        .ok_or_else(|| anyhow!("no book with id '{}' in the catalog", args.id))?;
    print_book_details(&book);
    Ok(())
}

/// Build a session over the payload and run the load to completion.
fn load_session(payload: &Path) -> Result<CatalogSession> {
    let source = FileCatalogSource::new(payload);
    let mut session = CatalogSession::new(Arc::new(source));
    session.load_blocking();
    match session.state().phase {
        LoadPhase::Ready => Ok(session),
        _ => {
            let message = session
                .state()
                .error
                .clone()
                .unwrap_or_else(|| "catalog load did not complete".to_string());
            Err(anyhow!(message))
        }
    }
}

/// Selecting an item passes the book out by value.
fn find_book(session: &CatalogSession, id: &str) -> Option<Book> {
    session
        .state()
        .books
        .iter()
        .find(|book| book.id == id)
        .cloned()
}
