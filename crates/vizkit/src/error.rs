//! Error types for the vizkit library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vizkit operations.
#[derive(Debug, Error)]
pub enum VizkitError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// No metric role was mapped; the pipeline cannot proceed without one.
    #[error("Roles must at least include a metric column")]
    MissingMetricRole,

    /// A role names a column that does not exist in the table.
    #[error("{role} column '{column}' not found in data")]
    ColumnNotFound { role: &'static str, column: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for vizkit operations.
pub type Result<T> = std::result::Result<T, VizkitError>;
