//! Where the datasets live.
//!
//! There is no built-in location: paths come from explicit values or the
//! environment, and a dataset with neither is a [`LoadError::MissingPath`].

use crate::dataset::DatasetKind;
use crate::error::{LoadError, Result};
use crate::loader::{CsvOptions, DatasetLoader};
use crate::status::{LoadStatus, Loaded};
use polars::prelude::DataFrame;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds all three files.
pub const DATA_DIR_ENV: &str = "FRAUDLENS_DATA_DIR";

/// Dataset locations and parse options.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    data_dir: Option<PathBuf>,
    transactions: Option<PathBuf>,
    ip_country: Option<PathBuf>,
    credit_card: Option<PathBuf>,
    /// CSV parse options shared by all datasets
    pub csv: CsvOptions,
}

impl DataConfig {
    /// Empty configuration; every path must be set before loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read locations from `FRAUDLENS_*` environment variables.
    ///
    /// Unset and empty variables are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let get = |key: &str| lookup(key).filter(|p| !p.as_os_str().is_empty());

        let mut config = Self {
            data_dir: get(DATA_DIR_ENV),
            ..Self::default()
        };
        for kind in DatasetKind::ALL {
            if let Some(path) = get(kind.path_env_var()) {
                config.set_path(kind, path);
            }
        }
        config
    }

    /// Directory holding the datasets under their published file names.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Explicit path for one dataset; takes precedence over the data dir.
    pub fn with_path(mut self, kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        self.set_path(kind, path.into());
        self
    }

    /// Parse options for all datasets.
    pub const fn with_csv_options(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    fn set_path(&mut self, kind: DatasetKind, path: PathBuf) {
        *self.slot_mut(kind) = Some(path);
    }

    const fn slot(&self, kind: DatasetKind) -> Option<&PathBuf> {
        match kind {
            DatasetKind::Transactions => self.transactions.as_ref(),
            DatasetKind::IpCountry => self.ip_country.as_ref(),
            DatasetKind::CreditCard => self.credit_card.as_ref(),
        }
    }

    const fn slot_mut(&mut self, kind: DatasetKind) -> &mut Option<PathBuf> {
        match kind {
            DatasetKind::Transactions => &mut self.transactions,
            DatasetKind::IpCountry => &mut self.ip_country,
            DatasetKind::CreditCard => &mut self.credit_card,
        }
    }

    /// Configured data directory.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Resolve the file for a dataset.
    ///
    /// An explicit path wins; otherwise the published file name under the
    /// data directory.
    pub fn path_for(&self, kind: DatasetKind) -> Result<PathBuf> {
        if let Some(path) = self.slot(kind) {
            return Ok(path.clone());
        }
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(kind.file_name()))
            .ok_or(LoadError::MissingPath(kind))
    }
}

/// The three datasets, each `None` if its file was missing.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// E-commerce transactions
    pub transactions: Option<DataFrame>,
    /// IP range to country lookup
    pub ip_country: Option<DataFrame>,
    /// Credit card transactions
    pub credit_card: Option<DataFrame>,
    statuses: Vec<LoadStatus>,
}

impl Datasets {
    fn from_loads(loads: Vec<Loaded>) -> Self {
        let statuses = loads.iter().map(Loaded::status).collect();
        let mut datasets = Self {
            transactions: None,
            ip_country: None,
            credit_card: None,
            statuses,
        };
        for loaded in loads {
            let kind = loaded.kind();
            *datasets.frame_mut(kind) = loaded.into_frame();
        }
        datasets
    }

    const fn frame_mut(&mut self, kind: DatasetKind) -> &mut Option<DataFrame> {
        match kind {
            DatasetKind::Transactions => &mut self.transactions,
            DatasetKind::IpCountry => &mut self.ip_country,
            DatasetKind::CreditCard => &mut self.credit_card,
        }
    }

    /// Table for a dataset kind.
    pub const fn get(&self, kind: DatasetKind) -> Option<&DataFrame> {
        match kind {
            DatasetKind::Transactions => self.transactions.as_ref(),
            DatasetKind::IpCountry => self.ip_country.as_ref(),
            DatasetKind::CreditCard => self.credit_card.as_ref(),
        }
    }

    /// One status per dataset, in load order.
    pub fn statuses(&self) -> &[LoadStatus] {
        &self.statuses
    }
}

/// Load all three datasets in [`DatasetKind::ALL`] order.
///
/// Missing files are reported in the statuses; the first other error stops
/// the run.
pub fn load_all(config: &DataConfig) -> Result<Datasets> {
    let loader = DatasetLoader::new(config.csv);
    let loads = DatasetKind::ALL
        .into_iter()
        .map(|kind| loader.load_report(kind, config.path_for(kind)?))
        .collect::<Result<Vec<_>>>()?;
    Ok(Datasets::from_loads(loads))
}
