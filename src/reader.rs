//! The table loader: reads a CSV file into a [`Table`].

use crate::error::ConvertError;
use crate::table::{Cell, Table};
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;

/// Loads the whole CSV file at `path` into memory.
///
/// The first record is treated as the header row. Rows shorter than the
/// header are padded with empty cells; rows wider than the header are a
/// conversion error. A missing source file is reported as
/// [`ConvertError::SourceNotFound`], every other failure as
/// [`ConvertError::Conversion`].
pub fn load(path: &Path) -> Result<Table, ConvertError> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConvertError::SourceNotFound(path.to_path_buf())
        } else {
            ConvertError::conversion(err)
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .map_err(ConvertError::conversion)?
        .iter()
        .map(str::to_string)
        .collect();

    if columns.is_empty() {
        return Err(ConvertError::Conversion(format!(
            "no columns to parse from '{}'",
            path.display()
        )));
    }

    let mut table = Table::new(columns);
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(ConvertError::conversion)?;
        let row = record.iter().map(Cell::infer).collect();
        table.push_row(row, index + 1)?;
    }

    log::debug!(
        "loaded {} rows x {} columns from {}",
        table.len(),
        table.width(),
        path.display()
    );

    Ok(table)
}
