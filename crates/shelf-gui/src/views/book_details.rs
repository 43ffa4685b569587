//! Book detail screen
//!
//! Renders one book passed by value; holds no state of its own beyond
//! echoing the given record.

use egui::{RichText, Ui};

use shelf_model::Book;

/// Book detail screen view
pub struct BookDetailsView;

impl BookDetailsView {
    /// Render the detail screen.
    ///
    /// Returns true when the user asked to navigate back.
    pub fn show(ui: &mut Ui, book: &Book) -> bool {
        let mut go_back = false;

        if ui.button("< Back").clicked() {
            go_back = true;
        }
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading(&book.title);
            ui.label(RichText::new(format!("by {}", book.author_line())).italics());
            ui.add_space(12.0);

            egui::Grid::new("book_details")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    if !book.publisher.is_empty() {
                        ui.label(RichText::new("Publisher").strong());
                        ui.label(&book.publisher);
                        ui.end_row();
                    }
                    if !book.published_date.is_empty() {
                        ui.label(RichText::new("Published").strong());
                        ui.label(&book.published_date);
                        ui.end_row();
                    }
                    if book.page_count > 0 {
                        ui.label(RichText::new("Pages").strong());
                        ui.label(book.page_count.to_string());
                        ui.end_row();
                    }
                    if let Some(rating) = book.average_rating {
                        ui.label(RichText::new("Rating").strong());
                        let text = match book.ratings_count {
                            Some(count) => format!("{rating:.1} ({count} ratings)"),
                            None => format!("{rating:.1}"),
                        };
                        ui.label(text);
                        ui.end_row();
                    }
                    if !book.categories.is_empty() {
                        ui.label(RichText::new("Categories").strong());
                        ui.label(book.categories.join(", "));
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);
            ui.label(&book.description);
        });

        go_back
    }
}
