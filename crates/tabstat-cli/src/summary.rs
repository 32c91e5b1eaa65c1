use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabstat_cli::types::{BatchResult, DatasetOutcome, DatasetStatus};

pub fn print_summary(result: &BatchResult) {
    println!();
    println!("Data directory: {}", result.data_dir.display());
    println!("Configuration: {}", result.config_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("File"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Skipped"),
        header_cell("Summary"),
        header_cell("Transformed"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Center);
    let mut total_rows = 0usize;
    let mut total_skipped = 0usize;
    for dataset in &result.datasets {
        total_rows += dataset.rows_considered;
        total_skipped += dataset.values_skipped;
        table.add_row(dataset_row(dataset));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} processed, {} skipped",
            result.processed_count(),
            result.skipped_count()
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_errors(result);
}

fn dataset_row(dataset: &DatasetOutcome) -> Vec<Cell> {
    let file = dataset.file_name.as_deref().unwrap_or("-");
    match &dataset.status {
        DatasetStatus::Processed => vec![
            Cell::new(&dataset.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file),
            Cell::new("processed").fg(Color::Green),
            Cell::new(format!("{}/{}", dataset.rows_considered, dataset.rows_read)),
            Cell::new(format!(
                "{}/{}",
                dataset.columns_resolved, dataset.columns_selected
            )),
            count_cell(dataset.values_skipped, Color::Yellow),
            output_cell(dataset.summary_path.as_ref()),
            output_cell(dataset.transformed_path.as_ref()),
        ],
        DatasetStatus::Skipped { .. } => vec![
            Cell::new(&dataset.key).fg(Color::DarkGrey),
            dim_cell(file),
            Cell::new("skipped")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ],
    }
}

fn print_errors(result: &BatchResult) {
    let mut lines = Vec::new();
    for dataset in &result.datasets {
        if let DatasetStatus::Skipped { reason } = &dataset.status {
            lines.push(format!("{}: {reason}", dataset.key));
        }
        for error in &dataset.errors {
            lines.push(format!("{}: {error}", dataset.key));
        }
    }
    if lines.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for line in lines {
        eprintln!("- {line}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
