//! Bookshelf - Desktop catalog browser
//!
//! Shows a bundled book catalog as a searchable list with a detail view.

use eframe::egui;

use shelf_gui::app::ShelfApp;

const DEFAULT_PAYLOAD: &str = "assets/volumes.json";

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let payload = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PAYLOAD.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bookshelf")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bookshelf",
        options,
        Box::new(move |cc| Ok(Box::new(ShelfApp::new(cc, payload.into())))),
    )
}
