//! Defines custom error types for the application.

use std::path::PathBuf;
use thiserror::Error;

/// Error type returned when a conversion fails.
///
/// Usage errors (wrong argument count) are not represented here; they
/// terminate the process in [`crate::cli::parse`] before any conversion is
/// attempted.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The source path does not resolve to an existing file.
    #[error("The file '{}' was not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// Any other failure while reading the source or writing the
    /// destination, carrying the underlying cause's description.
    #[error("{0}")]
    Conversion(String),
}

impl ConvertError {
    /// Wraps an arbitrary failure cause as a generic conversion error.
    pub fn conversion(cause: impl std::fmt::Display) -> Self {
        ConvertError::Conversion(cause.to_string())
    }
}
