//! Error types for dataset loading.

use crate::dataset::DatasetKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that propagate out of a load.
///
/// A missing file is never reported through this type; the loaders turn it
/// into `Ok(None)`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error other than "not found"
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// CSV parse or encoding error
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        /// Path being parsed
        path: PathBuf,
        /// Underlying polars error
        #[source]
        source: polars::prelude::PolarsError,
    },

    /// No location configured for a dataset
    #[error("No path configured for the {0} dataset")]
    MissingPath(DatasetKind),

    /// Unknown dataset name
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: polars::prelude::PolarsError) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
