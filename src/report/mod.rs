//! Text rendering of an [`Analysis`] as box-drawn tables.
//!
//! Tables are written through `Table::print`, which never emits terminal
//! colour codes, so output for the same input is byte-for-byte stable.

use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};

use crate::config::PipelineConfig;
use crate::dataset::{render_value, ProjectRecord};
use crate::pipeline::Analysis;
use crate::stats::FrequencyTable;
use crate::themes::ThemeRow;

/// Cells longer than this are cut and suffixed with `...`.
const MAX_CELL_CHARS: usize = 48;

pub fn write_report<W: Write>(out: &mut W, a: &Analysis, cfg: &PipelineConfig) -> io::Result<()> {
    section(
        out,
        &format!("Projects (first {} of {})", cfg.head_rows.min(a.records.len()), a.records.len()),
        &records_head(&a.records, cfg.head_rows),
    )?;
    section(
        out,
        &format!("Top {} countries by project count", cfg.top_k),
        &frequency(&a.countries, &cfg.country_field, cfg.top_k),
    )?;
    section(
        out,
        &format!("Major themes ({} rows)", a.themes.len()),
        &theme_rows(&a.themes),
    )?;
    section(
        out,
        &format!("Top {} major theme codes", cfg.top_k),
        &frequency(&a.theme_codes, "code", cfg.top_k),
    )?;
    section(
        out,
        "Major themes with names filled in",
        &theme_rows(&a.normalized),
    )?;
    section(
        out,
        &format!("Top {} major theme names", cfg.top_k),
        &frequency(&a.theme_names, "name", cfg.top_k),
    )?;
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str, table: &Table) -> io::Result<()> {
    writeln!(out, "\n--- {} ---", title)?;
    table.print(out)?;
    Ok(())
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    table
}

/// First `n` records; columns are the union of their keys in first-seen order.
pub fn records_head(records: &[ProjectRecord], n: usize) -> Table {
    let head = &records[..n.min(records.len())];
    let mut columns: Vec<&str> = Vec::new();
    for rec in head {
        for col in rec.columns() {
            if !columns.contains(&col) {
                columns.push(col);
            }
        }
    }

    let mut headers = vec![""];
    headers.extend(columns.iter().copied());
    let mut table = new_table(&headers);
    for rec in head {
        let mut cells = vec![Cell::new(&rec.index().to_string()).style_spec("r")];
        cells.extend(columns.iter().map(|col| {
            let text = rec.get(col).map(render_value).unwrap_or_default();
            Cell::new(&truncate(&text))
        }));
        table.add_row(Row::new(cells));
    }
    table
}

pub fn frequency(freq: &FrequencyTable, label: &str, k: usize) -> Table {
    let mut table = new_table(&[label, "count"]);
    for entry in freq.top(k) {
        table.add_row(Row::new(vec![
            Cell::new(&truncate(&entry.label())),
            Cell::new(&entry.count.to_string()).style_spec("r"),
        ]));
    }
    table
}

pub fn theme_rows(rows: &[ThemeRow]) -> Table {
    let mut headers = vec![""];
    headers.extend(ThemeRow::COLUMNS);
    let mut table = new_table(&headers);
    for (i, row) in rows.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&i.to_string()).style_spec("r"),
            Cell::new(&render_value(&row.code)),
            Cell::new(&truncate(&row.name)),
            Cell::new(&render_value(&row.id)),
        ]));
    }
    table
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_CELL_CHARS - 3).collect();
    format!("{}...", cut)
}
