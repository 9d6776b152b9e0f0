//! Error handling for the care gap pipeline.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for loading, analysing and exporting care gap data
#[derive(Debug, thiserror::Error)]
pub enum CareGapError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File-level IO error with the offending path attached
    #[error("IO error at {path}: {message}", path = path.display())]
    File {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Error building or reading Arrow record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting records to Arrow via serde
    #[error("Serialization error: {0}")]
    SerdeArrow(#[from] serde_arrow::Error),

    /// Error producing the JSON summary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from an input table
    #[error("Column '{column}' not found in {table} table")]
    ColumnNotFound { table: String, column: String },

    /// A column could not be read as the expected Arrow type
    #[error("Column '{column}' has unexpected type (expected {expected})")]
    InvalidDataType { column: String, expected: String },

    /// Input file has an extension the reader does not understand
    #[error("Unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CareGapError {
    /// Create a file error without an underlying IO source
    pub fn file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::File {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file error wrapping an IO error
    pub fn file_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::File {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a missing column error
    pub fn column_not_found(table: &str, column: &str) -> Self {
        Self::ColumnNotFound {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

/// Result type for care gap operations
pub type Result<T> = std::result::Result<T, CareGapError>;
