//! Error types for scaling-report

use std::path::PathBuf;
use thiserror::Error;

/// Report generation error
#[derive(Error, Debug)]
pub enum ReportError {
    /// The benchmark summary file does not exist
    #[error("could not find {}", path.display())]
    InputMissing {
        /// Path that was expected to hold the input
        path: PathBuf,
    },

    /// CSV read or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a row
    #[error("missing field `{field}` in row {row}")]
    MissingField {
        /// Column name
        field: &'static str,
        /// 1-based data row number
        row: usize,
    },

    /// An integer column holds something that is not an integer
    #[error("invalid integer {value:?} for `{field}` in row {row}: {source}")]
    InvalidInteger {
        /// Column name
        field: &'static str,
        /// 1-based data row number
        row: usize,
        /// Raw cell content
        value: String,
        /// Underlying parse error
        source: std::num::ParseIntError,
    },

    /// Chart rendering error
    #[error("chart error: {0}")]
    Chart(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;
