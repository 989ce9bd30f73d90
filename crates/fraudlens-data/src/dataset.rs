//! The three fraud-detection datasets.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of dataset a CSV file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// E-commerce transaction events
    Transactions,

    /// IP address range to country lookup
    IpCountry,

    /// Bank credit card transactions
    CreditCard,
}

impl DatasetKind {
    /// All dataset kinds, in load order.
    pub const ALL: [Self; 3] = [Self::Transactions, Self::IpCountry, Self::CreditCard];

    /// Stable machine name, as used in config keys and JSON output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::IpCountry => "ip_country",
            Self::CreditCard => "credit_card",
        }
    }

    /// Human label used in status messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transactions => "e-commerce",
            Self::IpCountry => "IP to country",
            Self::CreditCard => "credit card",
        }
    }

    /// File name the dataset is published under.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Transactions => "Fraud_Data.csv",
            Self::IpCountry => "IpAddress_to_Country.csv",
            Self::CreditCard => "creditcard.csv",
        }
    }

    /// Environment variable holding an explicit path for this dataset.
    pub const fn path_env_var(&self) -> &'static str {
        match self {
            Self::Transactions => "FRAUDLENS_TRANSACTIONS_PATH",
            Self::IpCountry => "FRAUDLENS_IP_COUNTRY_PATH",
            Self::CreditCard => "FRAUDLENS_CREDIT_CARD_PATH",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LoadError::UnknownDataset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DatasetKind::Transactions, "transactions")]
    #[case(DatasetKind::IpCountry, "ip_country")]
    #[case(DatasetKind::CreditCard, "credit_card")]
    fn test_name_round_trip(#[case] kind: DatasetKind, #[case] name: &str) {
        assert_eq!(kind.to_string(), name);
        assert_eq!(name.parse::<DatasetKind>().unwrap(), kind);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            " Credit_Card ".parse::<DatasetKind>().unwrap(),
            DatasetKind::CreditCard
        );
    }

    #[test]
    fn test_parse_unknown() {
        let result = "orders".parse::<DatasetKind>();
        assert!(matches!(result, Err(LoadError::UnknownDataset(name)) if name == "orders"));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(DatasetKind::Transactions.file_name(), "Fraud_Data.csv");
        assert_eq!(
            DatasetKind::IpCountry.file_name(),
            "IpAddress_to_Country.csv"
        );
        assert_eq!(DatasetKind::CreditCard.file_name(), "creditcard.csv");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&DatasetKind::IpCountry).unwrap();
        assert_eq!(json, "\"ip_country\"");
    }
}
