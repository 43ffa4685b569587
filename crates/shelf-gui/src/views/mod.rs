//! View components
//!
//! Each view represents a major screen in the application.

mod book_details;
mod book_list;

pub use book_details::BookDetailsView;
pub use book_list::BookListView;
