use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ckd_common::format_numeric;
use ckd_model::{BatchResult, DatasetSummary, RiskLabel};

pub fn print_batch_summary(result: &BatchResult) {
    println!("{}", batch_table(result));
    println!(
        "Total: {}  Alto riesgo: {}  Sin indicios: {}",
        result.total_rows, result.positive_count, result.negative_count
    );
}

pub fn batch_table(result: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Fila"),
        header_cell("Predicción"),
        header_cell("Probabilidad"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &result.entries {
        let label = entry.result.label;
        let color = match label {
            RiskLabel::Positive => Color::Red,
            RiskLabel::Negative => Color::Green,
        };
        table.add_row(vec![
            Cell::new(entry.row),
            Cell::new(label.text()).fg(color),
            Cell::new(format!("{}%", entry.result.confidence)),
        ]);
    }
    table
}

pub fn print_dataset_summary(summary: &DatasetSummary) {
    println!(
        "Rows: {}  Columns: {}  Nulls: {}",
        summary.row_count,
        summary.column_count,
        summary.total_nulls()
    );
    println!("{}", columns_table(summary));
    if !summary.numeric.is_empty() {
        println!("{}", numeric_table(summary));
    }
    if let Some(dist) = &summary.class_distribution {
        let mut table = Table::new();
        table.set_header(vec![header_cell(&dist.column), header_cell("Count")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (value, count) in &dist.counts {
            table.add_row(vec![Cell::new(value), Cell::new(count)]);
        }
        println!("{table}");
    }
}

pub fn columns_table(summary: &DatasetSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &summary.columns {
        let nulls = if column.null_count > 0 {
            Cell::new(column.null_count).fg(Color::Yellow)
        } else {
            dim_cell(column.null_count)
        };
        table.add_row(vec![Cell::new(&column.name), Cell::new(&column.dtype), nulls]);
    }
    table
}

pub fn numeric_table(summary: &DatasetSummary) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"]
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 1..9 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for stats in &summary.numeric {
        table.add_row(vec![
            Cell::new(&stats.name),
            Cell::new(stats.count),
            stat_cell(stats.mean),
            stat_cell(stats.std),
            stat_cell(stats.min),
            stat_cell(stats.p25),
            stat_cell(stats.median),
            stat_cell(stats.p75),
            stat_cell(stats.max),
        ]);
    }
    table
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric((v * 1000.0).round() / 1000.0)),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
