//! Table and detail rendering for the terminal browser.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use shelf_model::Book;
use shelf_session::BookListState;

/// Print the selection header and the current filtered subset.
pub fn print_book_list(state: &BookListState) {
    println!(
        "Filter: {} | Sort: {}",
        state.selected_filter.label(),
        state.selected_sort.label()
    );
    if !state.search_query.is_empty() {
        println!("Search: {}", state.search_query);
    }
    if state.filtered_books.is_empty() {
        println!("No books found");
        return;
    }
    println!("{}", book_table(&state.filtered_books));
    println!(
        "{} of {} books",
        state.filtered_books.len(),
        state.books.len()
    );
}

/// Build the list table.
pub fn book_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Authors"),
        header_cell("Published"),
        header_cell("Pages"),
        header_cell("Rating"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for book in books {
        table.add_row(vec![
            Cell::new(&book.id).fg(Color::Blue),
            Cell::new(&book.title).add_attribute(Attribute::Bold),
            Cell::new(book.author_line()),
            text_or_dash(&book.published_date),
            pages_cell(book.page_count),
            rating_cell(book),
        ]);
    }
    table
}

/// Print the full detail block for one book.
pub fn print_book_details(book: &Book) {
    println!("{}", book.title);
    println!("by {}", book.author_line());
    println!();
    if !book.publisher.is_empty() {
        println!("Publisher:  {}", book.publisher);
    }
    if !book.published_date.is_empty() {
        println!("Published:  {}", book.published_date);
    }
    if book.page_count > 0 {
        println!("Pages:      {}", book.page_count);
    }
    if let Some(rating) = book.average_rating {
        match book.ratings_count {
            Some(count) => println!("Rating:     {rating:.1} ({count} ratings)"),
            None => println!("Rating:     {rating:.1}"),
        }
    }
    if !book.categories.is_empty() {
        println!("Categories: {}", book.categories.join(", "));
    }
    if let Some(url) = &book.thumbnail_url {
        println!("Thumbnail:  {url}");
    }
    println!();
    println!("{}", book.description);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(16)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn pages_cell(page_count: u32) -> Cell {
    if page_count == 0 {
        dim_cell("-")
    } else {
        Cell::new(page_count)
    }
}

fn rating_cell(book: &Book) -> Cell {
    match (book.average_rating, book.ratings_count) {
        (Some(rating), Some(count)) => Cell::new(format!("{rating:.1} ({count})")),
        (Some(rating), None) => Cell::new(format!("{rating:.1}")),
        _ => dim_cell("-"),
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
