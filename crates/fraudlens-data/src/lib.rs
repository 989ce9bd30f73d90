#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fraudlens/fraudlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod status;

pub use config::{DATA_DIR_ENV, DataConfig, Datasets, load_all};
pub use dataset::DatasetKind;
pub use error::{LoadError, Result};
pub use loader::{
    CsvOptions, DEFAULT_INFER_SCHEMA_LENGTH, DatasetLoader, load_card_data, load_dataset,
    load_dataset_report, load_ip_country_map, load_transaction_data,
};
pub use status::{LoadStatus, Loaded};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
