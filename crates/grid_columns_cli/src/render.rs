use anyhow::Result;
use grid_columns::{PickerView, Table};
use std::io::Write;

/// Header of the row number column
pub const ROW_NUMBER_HEADER: &str = "#";

pub fn write_picker<W: Write>(out: &mut W, button_label: &str, view: &PickerView) -> Result<()> {
    writeln!(out, "[{button_label}]")?;
    if view.is_empty() {
        writeln!(out, "  (no columns to choose from)")?;
    }
    for (column, checked) in view.entries() {
        let mark = if checked { 'x' } else { ' ' };
        match &column.label {
            Some(label) => writeln!(out, "  [{mark}] {:<16} {label}", column.identifier)?,
            None => writeln!(out, "  [{mark}] {}", column.identifier)?,
        }
    }
    Ok(())
}

/// Writes `table` as CSV, keeping only the columns at `indexes`.
///
/// Index 0 is the row number column; index `n` is CSV column `n - 1`.
pub fn write_view<W: Write>(
    out: W,
    table: &Table,
    headers: &[&str],
    indexes: &[usize],
    limit: Option<usize>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(headers)?;

    let row_count = limit.map_or(table.rows().len(), |n| n.min(table.rows().len()));
    for row in 0..row_count {
        let number = (row + 1).to_string();
        let record: Vec<&str> = indexes
            .iter()
            .map(|&index| match index {
                0 => number.as_str(),
                _ => table.cell(row, index - 1),
            })
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
