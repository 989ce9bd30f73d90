//! Load outcomes and their status messages.

use crate::dataset::DatasetKind;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What happened when a dataset was loaded.
///
/// The `Display` text is the message the loader logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// The file was read into a table.
    Loaded {
        /// Dataset kind
        dataset: DatasetKind,
        /// Number of data rows
        records: usize,
    },

    /// The file does not exist.
    NotFound {
        /// Dataset kind
        dataset: DatasetKind,
        /// Path that was tried
        path: PathBuf,
    },
}

impl LoadStatus {
    /// Dataset this status is about.
    pub const fn dataset(&self) -> DatasetKind {
        match self {
            Self::Loaded { dataset, .. } | Self::NotFound { dataset, .. } => *dataset,
        }
    }

    /// Whether a table was produced.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { dataset, records } => {
                write!(f, "Loaded {} data with {} records.", dataset.label(), records)
            }
            Self::NotFound { path, .. } => write!(f, "Error: File {} not found.", path.display()),
        }
    }
}

/// Result of loading one dataset.
///
/// `frame` is `None` when the file was missing, which is distinct from a
/// table with zero rows.
#[derive(Debug, Clone)]
pub struct Loaded {
    kind: DatasetKind,
    path: PathBuf,
    frame: Option<DataFrame>,
}

impl Loaded {
    pub(crate) const fn new(kind: DatasetKind, path: PathBuf, frame: Option<DataFrame>) -> Self {
        Self { kind, path, frame }
    }

    /// Dataset kind.
    pub const fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Path the dataset was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The table, if the file existed.
    pub const fn frame(&self) -> Option<&DataFrame> {
        self.frame.as_ref()
    }

    /// Number of rows, if the file existed.
    pub fn records(&self) -> Option<usize> {
        self.frame.as_ref().map(DataFrame::height)
    }

    /// Whether the file was missing.
    pub const fn is_absent(&self) -> bool {
        self.frame.is_none()
    }

    /// Status of this load.
    pub fn status(&self) -> LoadStatus {
        match &self.frame {
            Some(df) => LoadStatus::Loaded {
                dataset: self.kind,
                records: df.height(),
            },
            None => LoadStatus::NotFound {
                dataset: self.kind,
                path: self.path.clone(),
            },
        }
    }

    /// Take the table out.
    pub fn into_frame(self) -> Option<DataFrame> {
        self.frame
    }
}
