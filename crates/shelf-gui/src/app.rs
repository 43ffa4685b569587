//! Main application struct and eframe::App implementation

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

use shelf_catalog::FileCatalogSource;
use shelf_model::Book;
use shelf_session::CatalogSession;

use crate::views::{BookDetailsView, BookListView};

/// Current view in the application
#[derive(Debug, Default, Clone, PartialEq)]
pub enum View {
    /// Searchable book list
    #[default]
    List,
    /// Detail screen for one selected book, passed by value
    Details(Book),
}

/// Main application struct
pub struct ShelfApp {
    session: CatalogSession,
    view: View,
}

impl ShelfApp {
    /// Create the app and kick off the one-time catalog load.
    pub fn new(cc: &eframe::CreationContext<'_>, payload: PathBuf) -> Self {
        let source = FileCatalogSource::new(payload);
        let mut session = CatalogSession::new(Arc::new(source));

        // Repaint when the loader thread finishes so the next frame polls
        // the outcome promptly.
        let ctx = cc.egui_ctx.clone();
        session.load_with_notify(move || ctx.request_repaint());

        Self {
            session,
            view: View::default(),
        }
    }

    /// Navigate to the detail screen.
    pub fn open_details(&mut self, book: Book) {
        self.view = View::Details(book);
    }

    /// Navigate back to the list.
    pub fn go_back(&mut self) {
        self.view = View::List;
    }
}

impl eframe::App for ShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply a pending load outcome before rendering.
        self.session.poll();

        // Escape returns from the detail screen
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.view != View::List {
            self.go_back();
        }

        let mut selected: Option<Book> = None;
        let mut go_back = false;

        egui::CentralPanel::default().show(ctx, |ui| match &self.view {
            View::List => {
                selected = BookListView::show(ui, &mut self.session);
            }
            View::Details(book) => {
                go_back = BookDetailsView::show(ui, book);
            }
        });

        // Handle navigation after borrowing ends
        if let Some(book) = selected {
            self.open_details(book);
        }
        if go_back {
            self.go_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_the_list() {
        assert_eq!(View::default(), View::List);
    }
}
