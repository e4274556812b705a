//! The in-memory tabular representation passed from the loader to the writer.

use crate::error::ConvertError;

/// A single cell value, typed by default inference from the raw CSV field.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// An absent or empty field.
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Cell {
    /// Infers a typed cell from a raw field.
    ///
    /// Inference order: empty → boolean → integer → float → string. A field
    /// that parses as an integer never reaches the float branch, so `3` and
    /// `3.0` keep distinct types.
    pub fn infer(raw: &str) -> Cell {
        if raw.is_empty() {
            return Cell::Empty;
        }
        if raw.eq_ignore_ascii_case("true") {
            return Cell::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Cell::Bool(false);
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Cell::Float(f);
        }
        Cell::Str(raw.to_string())
    }
}

/// An ordered table: a header row naming the columns, followed by data rows.
///
/// Column count is fixed once the header is read; every data row holds
/// exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a data row, padding short rows with [`Cell::Empty`].
    ///
    /// A row wider than the header is malformed and rejected; `row_number`
    /// is the 1-based data row position used in the error message.
    pub fn push_row(&mut self, mut row: Vec<Cell>, row_number: usize) -> Result<(), ConvertError> {
        if row.len() > self.columns.len() {
            return Err(ConvertError::Conversion(format!(
                "row {} has {} fields, expected at most {}",
                row_number,
                row.len(),
                self.columns.len()
            )));
        }
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
