//! Defines the command-line interface for the application.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv2xlsx",
    version,
    about = "Convert a CSV file into a single-sheet XLSX spreadsheet."
)]
pub struct Cli {
    /// The CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// The XLSX file to write. Overwritten if it already exists.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Parses the invocation arguments, enforcing the usage-error exit policy.
///
/// Anything other than exactly two positional paths prints clap's rendered
/// error (which includes the usage line) and terminates with status 1.
/// `--help` and `--version` keep their conventional status 0.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    }
}
