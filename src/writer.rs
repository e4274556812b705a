//! The table writer: serializes a [`Table`] into a single-sheet XLSX file.

use crate::error::ConvertError;
use crate::table::{Cell, Table};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet};
use std::io::Write;
use std::path::Path;

/// Writes `table` to `path` as an XLSX workbook with one worksheet.
///
/// The header row occupies row 0 and the data rows follow in order; no
/// row-index column is written. The workbook is serialized to a buffer and
/// atomically persisted over the destination, so a failed conversion never
/// leaves a partial file behind. The destination directory must already
/// exist.
pub fn write(table: &Table, path: &Path) -> Result<(), ConvertError> {
    let buffer = render(table)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::Builder::new()
        .prefix(".csv2xlsx-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(ConvertError::conversion)?;

    temp_file
        .write_all(&buffer)
        .map_err(ConvertError::conversion)?;

    temp_file.persist(path).map_err(ConvertError::conversion)?;

    Ok(())
}

/// Serializes the workbook to an in-memory XLSX byte buffer.
fn render(table: &Table) -> Result<Vec<u8>, ConvertError> {
    let mut workbook = Workbook::new();

    // A fixed creation datetime keeps repeated conversions byte-identical.
    let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(ConvertError::conversion)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        write_cell(worksheet, 0, col, &Cell::Str(name.clone()))?;
    }

    for (row, cells) in table.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row + 1, col, cell)?;
        }
    }

    workbook.save_to_buffer().map_err(ConvertError::conversion)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: usize,
    col: usize,
    cell: &Cell,
) -> Result<(), ConvertError> {
    let row = u32::try_from(row)
        .map_err(|_| ConvertError::Conversion(format!("row {row} exceeds the XLSX row limit")))?;
    let col = u16::try_from(col).map_err(|_| {
        ConvertError::Conversion(format!("column {col} exceeds the XLSX column limit"))
    })?;

    match cell {
        Cell::Empty => {}
        Cell::Bool(b) => {
            worksheet
                .write_boolean(row, col, *b)
                .map_err(ConvertError::conversion)?;
        }
        Cell::Int(i) => {
            worksheet
                .write_number(row, col, *i as f64)
                .map_err(ConvertError::conversion)?;
        }
        Cell::Float(f) => {
            worksheet
                .write_number(row, col, *f)
                .map_err(ConvertError::conversion)?;
        }
        Cell::Str(s) => {
            worksheet
                .write_string(row, col, s)
                .map_err(ConvertError::conversion)?;
        }
    }

    Ok(())
}
