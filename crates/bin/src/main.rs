//! Fraudlens CLI binary.
//!
//! Loads the e-commerce, IP-to-country and credit card datasets and prints
//! one status line per dataset.

mod summary;

use clap::{Parser, ValueEnum};
use fraudlens_data::{CsvOptions, DATA_DIR_ENV, DataConfig, DatasetKind, load_all};
use std::path::PathBuf;
use std::process;
use summary::render_summary;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "fraudlens")]
#[command(about = "Load fraud-detection datasets", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding Fraud_Data.csv, IpAddress_to_Country.csv and creditcard.csv
    #[arg(long, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// E-commerce transaction file
    #[arg(long, env = "FRAUDLENS_TRANSACTIONS_PATH")]
    transactions: Option<PathBuf>,

    /// IP address to country file
    #[arg(long, env = "FRAUDLENS_IP_COUNTRY_PATH")]
    ip_country: Option<PathBuf>,

    /// Credit card transaction file
    #[arg(long, env = "FRAUDLENS_CREDIT_CARD_PATH")]
    credit_card: Option<PathBuf>,

    /// Rows scanned to infer column types (0 scans the whole file)
    #[arg(long, default_value_t = fraudlens_data::DEFAULT_INFER_SCHEMA_LENGTH)]
    infer_schema_length: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Summary output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One status message per line
    Text,
    /// JSON array of statuses
    Json,
}

impl Cli {
    fn config(&self) -> DataConfig {
        let rows = (self.infer_schema_length > 0).then_some(self.infer_schema_length);
        let mut config = DataConfig::new()
            .with_csv_options(CsvOptions::default().with_infer_schema_length(rows));

        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        let explicit = [
            (DatasetKind::Transactions, &self.transactions),
            (DatasetKind::IpCountry, &self.ip_country),
            (DatasetKind::CreditCard, &self.credit_card),
        ];
        for (kind, path) in explicit
            .into_iter()
            .filter_map(|(kind, path)| path.as_ref().map(|p| (kind, p)))
        {
            config = config.with_path(kind, path);
        }
        config
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log filter used when `RUST_LOG` is unset.
///
/// The loader's per-dataset status events are off because the summary
/// already prints the same messages.
const DEFAULT_LOG_FILTER: &str = "info,fraudlens_data=off";

fn init_tracing() {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.config();
    debug!(?config, "resolved dataset config");

    let datasets = load_all(&config)?;
    println!("{}", render_summary(datasets.statuses(), cli.format)?);

    Ok(())
}
