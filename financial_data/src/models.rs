// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

pub const FIRST_YEAR: i32 = 2009;
pub const LAST_YEAR: i32 = 2024;

/// Number of fiscal years held by the dataset.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

// Query-time failures surfaced to the presentation layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
    #[error("No record for year {0} (available: 2009-2024)")]
    NotFound(i32),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// Construction-time failures of the embedded table
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Malformed dataset literal: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Non-finite value in column '{column}' for year {year}")]
    NonFinite { column: &'static str, year: i32 },
    #[error("Year {0} appears more than once")]
    DuplicateYear(i32),
    #[error("Year {0} is missing from the dataset")]
    MissingYear(i32),
    #[error("Record for year {year} failed validation: {source}")]
    Invalid {
        year: i32,
        #[source]
        source: validator::ValidationErrors,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "EBITDA (millions)")]
    Ebitda,
    #[serde(rename = "Revenue (millions)")]
    Revenue,
    #[serde(rename = "Gross Profit (millions)")]
    GrossProfit,
    #[serde(rename = "Op Income (millions)")]
    OperatingIncome,
    #[serde(rename = "Net Income (millions)")]
    NetIncome,
    #[serde(rename = "EPS")]
    Eps,
    #[serde(rename = "Shares Outstanding")]
    SharesOutstanding,
    #[serde(rename = "Year Close Price")]
    YearClosePrice,
    #[serde(rename = "Total Assets (millions)")]
    TotalAssets,
    #[serde(rename = "Cash on Hand (millions)")]
    CashOnHand,
    #[serde(rename = "Long Term Debt (millions)")]
    LongTermDebt,
    #[serde(rename = "Total Liabilities (millions)")]
    TotalLiabilities,
    #[serde(rename = "Gross Margin")]
    GrossMargin,
    #[serde(rename = "PE ratio")]
    PeRatio,
    #[serde(rename = "Employees")]
    Employees,
}

/// Display unit of a metric, for axis titles and number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Year,
    MillionsUsd,
    Usd,
    Percent,
    Ratio,
    Count,
}

impl Metric {
    /// All columns, in the order of the source table.
    pub const ALL: [Metric; 16] = [
        Metric::Year,
        Metric::Ebitda,
        Metric::Revenue,
        Metric::GrossProfit,
        Metric::OperatingIncome,
        Metric::NetIncome,
        Metric::Eps,
        Metric::SharesOutstanding,
        Metric::YearClosePrice,
        Metric::TotalAssets,
        Metric::CashOnHand,
        Metric::LongTermDebt,
        Metric::TotalLiabilities,
        Metric::GrossMargin,
        Metric::PeRatio,
        Metric::Employees,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Year => "year",
            Metric::Ebitda => "EBITDA (millions)",
            Metric::Revenue => "Revenue (millions)",
            Metric::GrossProfit => "Gross Profit (millions)",
            Metric::OperatingIncome => "Op Income (millions)",
            Metric::NetIncome => "Net Income (millions)",
            Metric::Eps => "EPS",
            Metric::SharesOutstanding => "Shares Outstanding",
            Metric::YearClosePrice => "Year Close Price",
            Metric::TotalAssets => "Total Assets (millions)",
            Metric::CashOnHand => "Cash on Hand (millions)",
            Metric::LongTermDebt => "Long Term Debt (millions)",
            Metric::TotalLiabilities => "Total Liabilities (millions)",
            Metric::GrossMargin => "Gross Margin",
            Metric::PeRatio => "PE ratio",
            Metric::Employees => "Employees",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Metric::Year => Unit::Year,
            Metric::Eps | Metric::YearClosePrice => Unit::Usd,
            Metric::GrossMargin => Unit::Percent,
            Metric::PeRatio => Unit::Ratio,
            Metric::SharesOutstanding | Metric::Employees => Unit::Count,
            _ => Unit::MillionsUsd,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = DatasetError;

    // Labels must match the source table exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|metric| metric.label() == s)
            .ok_or_else(|| DatasetError::UnknownMetric(s.to_string()))
    }
}

// One fiscal year of the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Record {
    #[validate(range(min = 2009, max = 2024))]
    pub year: i32,
    #[serde(rename = "EBITDA (millions)")]
    pub ebitda: f64,
    #[serde(rename = "Revenue (millions)")]
    #[validate(range(min = 0.0))]
    pub revenue: f64,
    #[serde(rename = "Gross Profit (millions)")]
    pub gross_profit: f64,
    #[serde(rename = "Op Income (millions)")]
    pub operating_income: f64,
    #[serde(rename = "Net Income (millions)")]
    pub net_income: f64,
    #[serde(rename = "EPS")]
    pub eps: f64,
    #[serde(rename = "Shares Outstanding")]
    #[validate(range(min = 0.0))]
    pub shares_outstanding: f64,
    #[serde(rename = "Year Close Price")]
    #[validate(range(min = 0.0))]
    pub year_close_price: f64,
    #[serde(rename = "Total Assets (millions)")]
    #[validate(range(min = 0.0))]
    pub total_assets: f64,
    #[serde(rename = "Cash on Hand (millions)")]
    #[validate(range(min = 0.0))]
    pub cash_on_hand: f64,
    #[serde(rename = "Long Term Debt (millions)")]
    #[validate(range(min = 0.0))]
    pub long_term_debt: f64,
    #[serde(rename = "Total Liabilities (millions)")]
    #[validate(range(min = 0.0))]
    pub total_liabilities: f64,
    #[serde(rename = "Gross Margin")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub gross_margin: f64,
    #[serde(rename = "PE ratio")]
    pub pe_ratio: f64,
    #[serde(rename = "Employees")]
    #[validate(range(min = 0.0))]
    pub employees: f64,
}

impl Record {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Year => f64::from(self.year),
            Metric::Ebitda => self.ebitda,
            Metric::Revenue => self.revenue,
            Metric::GrossProfit => self.gross_profit,
            Metric::OperatingIncome => self.operating_income,
            Metric::NetIncome => self.net_income,
            Metric::Eps => self.eps,
            Metric::SharesOutstanding => self.shares_outstanding,
            Metric::YearClosePrice => self.year_close_price,
            Metric::TotalAssets => self.total_assets,
            Metric::CashOnHand => self.cash_on_hand,
            Metric::LongTermDebt => self.long_term_debt,
            Metric::TotalLiabilities => self.total_liabilities,
            Metric::GrossMargin => self.gross_margin,
            Metric::PeRatio => self.pe_ratio,
            Metric::Employees => self.employees,
        }
    }

    /// Looks a value up by its column label.
    pub fn get(&self, label: &str) -> Result<f64, DatasetError> {
        Ok(self.value(label.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.label().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn label_matching_is_exact() {
        assert_eq!(
            "eps".parse::<Metric>(),
            Err(DatasetError::UnknownMetric("eps".to_string()))
        );
        assert!("Revenue".parse::<Metric>().is_err());
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Metric::ALL;
        sorted.sort();
        assert_eq!(sorted, Metric::ALL);
    }

    #[test]
    fn serde_uses_source_labels() {
        let json = serde_json::to_string(&Metric::PeRatio).unwrap();
        assert_eq!(json, "\"PE ratio\"");
    }

    #[test]
    fn units() {
        assert_eq!(Metric::GrossMargin.unit(), Unit::Percent);
        assert_eq!(Metric::Revenue.unit(), Unit::MillionsUsd);
        assert_eq!(Metric::Employees.unit(), Unit::Count);
        assert_eq!(Metric::Eps.unit(), Unit::Usd);
    }
}
