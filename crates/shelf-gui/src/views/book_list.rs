//! Book list screen
//!
//! Search field, filter/sort selectors, and the scrollable result list.
//! Exactly one of spinner / error / empty notice / list is visible,
//! depending on the session state.

use egui::{Color32, RichText, Ui};

use shelf_model::{Book, FilterOption, SortOption};
use shelf_session::{CatalogSession, LoadPhase};

/// Book list screen view
pub struct BookListView;

impl BookListView {
    /// Render the list screen.
    ///
    /// Returns the book the user clicked, if any.
    pub fn show(ui: &mut Ui, session: &mut CatalogSession) -> Option<Book> {
        let mut selected: Option<Book> = None;

        ui.heading("Library");
        ui.add_space(8.0);

        Self::search_bar(ui, session);
        Self::filter_sort_row(ui, session);
        ui.add_space(8.0);
        ui.separator();

        match session.state().phase {
            LoadPhase::Idle | LoadPhase::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.label(RichText::new("Loading books...").weak());
                });
            }
            LoadPhase::Failed => {
                let message = session
                    .state()
                    .error
                    .clone()
                    .unwrap_or_else(|| "Failed to load books".to_string());
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new(message).color(Color32::RED));
                    ui.add_space(8.0);
                    if ui.button("Retry").clicked() {
                        let ctx = ui.ctx().clone();
                        session.load_with_notify(move || ctx.request_repaint());
                    }
                });
            }
            LoadPhase::Ready => {
                if session.state().filtered_books.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label("No books found");
                    });
                } else {
                    selected = Self::book_rows(ui, session);
                }
            }
        }

        selected
    }

    fn search_bar(ui: &mut Ui, session: &mut CatalogSession) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            let mut query = session.state().search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search books...")
                    .desired_width(280.0),
            );
            if response.changed() {
                session.set_search_text(&query);
            }
            if !session.state().search_query.is_empty() && ui.button("Clear").clicked() {
                session.clear_search();
            }
        });
    }

    fn filter_sort_row(ui: &mut Ui, session: &mut CatalogSession) {
        ui.horizontal(|ui| {
            let mut filter = session.state().selected_filter;
            egui::ComboBox::from_label("Filter")
                .selected_text(filter.label())
                .show_ui(ui, |ui| {
                    for option in FilterOption::all() {
                        ui.selectable_value(&mut filter, *option, option.label());
                    }
                });
            if filter != session.state().selected_filter {
                session.set_filter(filter);
            }

            ui.add_space(16.0);

            let mut sort = session.state().selected_sort;
            egui::ComboBox::from_label("Sort")
                .selected_text(sort.label())
                .show_ui(ui, |ui| {
                    for option in SortOption::all() {
                        ui.selectable_value(&mut sort, *option, option.label());
                    }
                });
            if sort != session.state().selected_sort {
                session.set_sort(sort);
            }
        });
    }

    fn book_rows(ui: &mut Ui, session: &CatalogSession) -> Option<Book> {
        let mut selected: Option<Book> = None;
        let state = session.state();

        ui.label(
            RichText::new(format!(
                "{} of {} books",
                state.filtered_books.len(),
                state.books.len()
            ))
            .weak()
            .small(),
        );
        ui.add_space(4.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for book in &state.filtered_books {
                let row = ui.add(
                    egui::Button::new(Self::row_text(book))
                        .min_size(egui::vec2(ui.available_width(), 0.0)),
                );
                if row.clicked() {
                    selected = Some(book.clone());
                }
                ui.add_space(2.0);
            }
        });

        selected
    }

    fn row_text(book: &Book) -> RichText {
        let mut line = format!("{}\n{}", book.title, book.author_line());
        if let Some(rating) = book.average_rating {
            line.push_str(&format!("  *{rating:.1}"));
        }
        RichText::new(line)
    }
}
