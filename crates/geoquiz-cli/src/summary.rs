use std::io::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use geoquiz_core::{MapSession, Renderer};
use geoquiz_model::CountryState;
use geoquiz_schema::CountryRecord;

/// Every country in draw order with its state and pending guess.
pub fn status_table<R: Renderer>(session: &MapSession<R>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("State"),
        header_cell("Guess"),
    ]);
    apply_table_style(&mut table);
    for country in session.countries() {
        let guess = session.guess_for(country.name()).unwrap_or_default();
        table.add_row(vec![
            Cell::new(country.name()),
            state_cell(country.state()),
            Cell::new(guess),
        ]);
    }
    table
}

/// Print the status table followed by the instruction, progress and score.
pub fn write_status<R: Renderer, W: Write>(
    session: &MapSession<R>,
    output: &mut W,
) -> std::io::Result<()> {
    let view = session.status();
    writeln!(output, "{}", status_table(session))?;
    writeln!(output, "{}", view.instruction)?;
    writeln!(output, "{}", view.progress)?;
    writeln!(output, "{}", view.score)?;
    if !view.hover.is_empty() {
        writeln!(output, "Hover: {}", view.hover)?;
    }
    Ok(())
}

/// Loaded schema rows, largest country first.
pub fn schema_table(records: &[CountryRecord]) -> Table {
    let mut ordered: Vec<&CountryRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.schema.order);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Country"),
        header_cell("Accepted names"),
        header_cell("Colour"),
        header_cell("Disputed"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for record in ordered {
        let schema = &record.schema;
        let names = schema
            .names
            .iter()
            .filter(|name| **name != schema.name)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let disputed = if schema.disputed {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(schema.order),
            Cell::new(&schema.name),
            Cell::new(names),
            Cell::new(&schema.colour),
            disputed,
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn state_cell(state: CountryState) -> Cell {
    let cell = Cell::new(state);
    match state {
        CountryState::Verified => cell.fg(Color::Green),
        CountryState::Guessed => cell.fg(Color::Yellow),
        CountryState::Selected | CountryState::Highlighted => cell.fg(Color::Cyan),
        CountryState::Disputed => cell.fg(Color::DarkGrey),
        CountryState::Open => cell,
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
