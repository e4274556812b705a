//! Core library for csv2xlsx: a single-pass CSV to XLSX conversion pipeline.
//!
//! The pipeline runs in strict sequence: argument resolution ([`cli`]),
//! table load ([`reader`]), table write ([`writer`]), outcome report
//! ([`run`]). Nothing is retained across invocations.

pub mod cli;
pub mod error;
pub mod reader;
pub mod table;
pub mod writer;

use crate::error::ConvertError;
use std::path::Path;

/// Converts the CSV file at `input` into an XLSX file at `output`.
///
/// The whole source table is materialized in memory, then written out in a
/// single pass. Each step is attempted exactly once.
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let table = reader::load(input)?;
    writer::write(&table, output)
}

/// The main entry point for the application logic.
///
/// Wraps [`convert`] with outcome reporting: every conversion failure is
/// caught here and turned into a printed message, and the process still
/// exits 0. Only the usage-error path (handled in [`cli::parse`]) exits
/// non-zero.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let cli = cli::parse();

    println!("input = {}", cli.input.display());
    println!("output = {}", cli.output.display());

    match convert(&cli.input, &cli.output) {
        Ok(()) => {
            println!(
                "Successfully converted '{}' to '{}'",
                cli.input.display(),
                cli.output.display()
            );
        }
        Err(ConvertError::SourceNotFound(path)) => {
            println!("Error: The file '{}' was not found.", path.display());
        }
        Err(err) => {
            println!("An error occurred: {err}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use calamine::{open_workbook, DataType, Reader, Xlsx};

    #[test]
    fn convert_round_trips_the_worked_example() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("people.csv");
        input.write_str("id,name\n1,Alice\n2,Bob\n").unwrap();
        let output = temp.child("people.xlsx");

        convert(input.path(), output.path()).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(output.path()).unwrap();
        let range = workbook
            .worksheet_range("Sheet1")
            .expect("Sheet1 exists")
            .expect("range is readable");

        assert_eq!(range.get_size(), (3, 2));
        assert_eq!(range.get_value((0, 0)), Some(&DataType::String("id".to_string())));
        assert_eq!(range.get_value((0, 1)), Some(&DataType::String("name".to_string())));
        assert_eq!(range.get_value((1, 0)), Some(&DataType::Float(1.0)));
        assert_eq!(range.get_value((1, 1)), Some(&DataType::String("Alice".to_string())));
        assert_eq!(range.get_value((2, 0)), Some(&DataType::Float(2.0)));
        assert_eq!(range.get_value((2, 1)), Some(&DataType::String("Bob".to_string())));
    }

    #[test]
    fn convert_missing_source_leaves_destination_untouched() {
        let temp = assert_fs::TempDir::new().unwrap();
        let output = temp.child("out.xlsx");

        let err = convert(&temp.path().join("missing.csv"), output.path()).unwrap_err();

        assert!(matches!(err, ConvertError::SourceNotFound(_)));
        assert!(!output.path().exists());
    }

    #[test]
    fn convert_garbage_source_leaves_no_partial_destination() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("garbage.bin");
        input.write_binary(b"\xff\xfe\x00\x01 not a csv \xff").unwrap();
        let output = temp.child("out.xlsx");

        let err = convert(input.path(), output.path()).unwrap_err();

        assert!(matches!(err, ConvertError::Conversion(_)));
        assert!(!output.path().exists());
    }
}
