//! CSV dataset loader.
//!
//! Each load opens the file, parses it with polars and returns the whole
//! table. A file that does not exist yields `Ok(None)` after logging a
//! not-found message; every other failure is returned to the caller.

use crate::dataset::DatasetKind;
use crate::error::{LoadError, Result};
use crate::status::Loaded;
use polars::prelude::*;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

/// Default number of rows polars scans to infer column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// How CSV files are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Whether the first row holds column names
    pub has_header: bool,
    /// Field separator
    pub separator: u8,
    /// Rows scanned for type inference; `None` scans the whole file
    pub infer_schema_length: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
        }
    }
}

impl CsvOptions {
    /// Set the field separator.
    pub const fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Set whether the first row is a header.
    pub const fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set how many rows are scanned for type inference.
    pub const fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}

/// Loads fraud-detection datasets from CSV files.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    options: CsvOptions,
}

impl DatasetLoader {
    /// Create a loader with custom parse options.
    pub const fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Parse options in use.
    pub const fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Load a dataset and report what happened.
    ///
    /// Logs `Loaded <label> data with <N> records.` at `info`, or
    /// `Error: File <path> not found.` at `error` when the file is missing.
    pub fn load_report<P: AsRef<Path>>(&self, kind: DatasetKind, path: P) -> Result<Loaded> {
        let path = path.as_ref();
        debug!(dataset = %kind, path = %path.display(), "loading dataset");

        let frame = read_csv(path, &self.options)?;
        let loaded = Loaded::new(kind, path.to_path_buf(), frame);
        let status = loaded.status();

        match loaded.records() {
            Some(records) => info!(dataset = %kind, records, "{status}"),
            None => error!(dataset = %kind, path = %path.display(), "{status}"),
        }

        Ok(loaded)
    }

    /// Load a dataset, returning `None` if the file does not exist.
    pub fn load<P: AsRef<Path>>(&self, kind: DatasetKind, path: P) -> Result<Option<DataFrame>> {
        self.load_report(kind, path).map(Loaded::into_frame)
    }

    /// Load the e-commerce transaction dataset.
    pub fn load_transaction_data<P: AsRef<Path>>(&self, path: P) -> Result<Option<DataFrame>> {
        self.load(DatasetKind::Transactions, path)
    }

    /// Load the IP address to country mapping.
    pub fn load_ip_country_map<P: AsRef<Path>>(&self, path: P) -> Result<Option<DataFrame>> {
        self.load(DatasetKind::IpCountry, path)
    }

    /// Load the credit card transaction dataset.
    pub fn load_card_data<P: AsRef<Path>>(&self, path: P) -> Result<Option<DataFrame>> {
        self.load(DatasetKind::CreditCard, path)
    }
}

/// Read a CSV file into a table.
///
/// Only `NotFound` on open maps to `Ok(None)`. The file handle is dropped
/// before returning on every path.
fn read_csv(path: &Path, options: &CsvOptions) -> Result<Option<DataFrame>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(LoadError::io(path, e)),
    };

    // Opening a directory succeeds on unix; reading it does not.
    let metadata = file.metadata().map_err(|e| LoadError::io(path, e))?;
    if metadata.is_dir() {
        return Err(LoadError::io(
            path,
            io::Error::from(io::ErrorKind::IsADirectory),
        ));
    }

    let df = CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| parse.with_separator(options.separator))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| LoadError::csv(path, e))?;

    Ok(Some(df))
}

/// Load a dataset with default parse options.
pub fn load_dataset<P: AsRef<Path>>(kind: DatasetKind, path: P) -> Result<Option<DataFrame>> {
    DatasetLoader::default().load(kind, path)
}

/// Load a dataset with default parse options and report what happened.
pub fn load_dataset_report<P: AsRef<Path>>(kind: DatasetKind, path: P) -> Result<Loaded> {
    DatasetLoader::default().load_report(kind, path)
}

/// Load the e-commerce transaction dataset (`Fraud_Data.csv`).
pub fn load_transaction_data<P: AsRef<Path>>(path: P) -> Result<Option<DataFrame>> {
    load_dataset(DatasetKind::Transactions, path)
}

/// Load the IP address to country mapping (`IpAddress_to_Country.csv`).
pub fn load_ip_country_map<P: AsRef<Path>>(path: P) -> Result<Option<DataFrame>> {
    load_dataset(DatasetKind::IpCountry, path)
}

/// Load the credit card transaction dataset (`creditcard.csv`).
pub fn load_card_data<P: AsRef<Path>>(path: P) -> Result<Option<DataFrame>> {
    load_dataset(DatasetKind::CreditCard, path)
}
