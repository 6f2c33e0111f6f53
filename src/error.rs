//! Load-time error types
//!
//! These are the only hard errors in the system, and they can only happen
//! while reading a file. Everything downstream of a successful load is a
//! soft failure (coerced value, dropped row, unrendered view).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("workbook error in {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("unsupported file format '{extension}' for {path} (expected csv, xls or xlsx)")]
    UnsupportedFormat { extension: String, path: PathBuf },

    /// A data row is wider than the header row: its trailing cells would
    /// have no date column to belong to, which means the sheet has slipped
    /// out of the expected layout. Better to refuse than misalign.
    #[error(
        "sheet '{sheet}' row {row} has {width} cells but the header row has {header_width}; \
         refusing to guess which dates the extra readings belong to"
    )]
    MisshapenSheet {
        sheet: String,
        row: usize,
        width: usize,
        header_width: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
