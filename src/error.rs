use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error type returned by the conversion utilities.
///
/// A single enum shared by the schema mapper, the header normalizer and the chunk splitter.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Underlying I/O error (permission denied, disk full, missing directory, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file does not exist.
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// The input has no header row (empty file or blank first line).
    #[error("csv file '{}' has no headers", path.display())]
    EmptyHeaders { path: PathBuf },

    /// A chunk size of zero was requested.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// Writing an output file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Returns `true` if this error (or the CSV error it wraps) is an I/O failure.
    pub fn is_io(&self) -> bool {
        match self {
            ConvertError::Io(_) | ConvertError::NotFound { .. } => true,
            ConvertError::Csv(err) => matches!(err.kind(), csv::ErrorKind::Io(_)),
            ConvertError::Write { source, .. } => source.is_io(),
            ConvertError::EmptyHeaders { .. } | ConvertError::InvalidChunkSize => false,
        }
    }

    /// Attribute `self` to a failed write of `path`.
    pub fn writing(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ ConvertError::Write { .. } => already,
            other => ConvertError::Write {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}
