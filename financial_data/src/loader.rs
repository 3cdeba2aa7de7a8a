// src/loader.rs

use crate::models::{LoadError, Metric, Record, FIRST_YEAR, LAST_YEAR, YEAR_COUNT};
use serde::Deserialize;
use std::collections::HashSet;
use validator::Validate;

/// Annual figures for fiscal years 2009-2024, newest first.
pub const EMBEDDED_DATASET: &str = include_str!("../data/apple_financials.json");

// Column-oriented layout of the literal: label -> one value per year
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawColumns {
    year: Vec<i32>,
    #[serde(rename = "EBITDA (millions)")]
    ebitda: Vec<f64>,
    #[serde(rename = "Revenue (millions)")]
    revenue: Vec<f64>,
    #[serde(rename = "Gross Profit (millions)")]
    gross_profit: Vec<f64>,
    #[serde(rename = "Op Income (millions)")]
    operating_income: Vec<f64>,
    #[serde(rename = "Net Income (millions)")]
    net_income: Vec<f64>,
    #[serde(rename = "EPS")]
    eps: Vec<f64>,
    #[serde(rename = "Shares Outstanding")]
    shares_outstanding: Vec<f64>,
    #[serde(rename = "Year Close Price")]
    year_close_price: Vec<f64>,
    #[serde(rename = "Total Assets (millions)")]
    total_assets: Vec<f64>,
    #[serde(rename = "Cash on Hand (millions)")]
    cash_on_hand: Vec<f64>,
    #[serde(rename = "Long Term Debt (millions)")]
    long_term_debt: Vec<f64>,
    #[serde(rename = "Total Liabilities (millions)")]
    total_liabilities: Vec<f64>,
    #[serde(rename = "Gross Margin")]
    gross_margin: Vec<f64>,
    #[serde(rename = "PE ratio")]
    pe_ratio: Vec<f64>,
    #[serde(rename = "Employees")]
    employees: Vec<f64>,
}

impl RawColumns {
    fn float_columns(&self) -> [(Metric, &[f64]); 15] {
        [
            (Metric::Ebitda, self.ebitda.as_slice()),
            (Metric::Revenue, self.revenue.as_slice()),
            (Metric::GrossProfit, self.gross_profit.as_slice()),
            (Metric::OperatingIncome, self.operating_income.as_slice()),
            (Metric::NetIncome, self.net_income.as_slice()),
            (Metric::Eps, self.eps.as_slice()),
            (Metric::SharesOutstanding, self.shares_outstanding.as_slice()),
            (Metric::YearClosePrice, self.year_close_price.as_slice()),
            (Metric::TotalAssets, self.total_assets.as_slice()),
            (Metric::CashOnHand, self.cash_on_hand.as_slice()),
            (Metric::LongTermDebt, self.long_term_debt.as_slice()),
            (Metric::TotalLiabilities, self.total_liabilities.as_slice()),
            (Metric::GrossMargin, self.gross_margin.as_slice()),
            (Metric::PeRatio, self.pe_ratio.as_slice()),
            (Metric::Employees, self.employees.as_slice()),
        ]
    }

    fn record_at(&self, i: usize) -> Record {
        Record {
            year: self.year[i],
            ebitda: self.ebitda[i],
            revenue: self.revenue[i],
            gross_profit: self.gross_profit[i],
            operating_income: self.operating_income[i],
            net_income: self.net_income[i],
            eps: self.eps[i],
            shares_outstanding: self.shares_outstanding[i],
            year_close_price: self.year_close_price[i],
            total_assets: self.total_assets[i],
            cash_on_hand: self.cash_on_hand[i],
            long_term_debt: self.long_term_debt[i],
            total_liabilities: self.total_liabilities[i],
            gross_margin: self.gross_margin[i],
            pe_ratio: self.pe_ratio[i],
            employees: self.employees[i],
        }
    }
}

fn check_len(column: &'static str, found: usize) -> Result<(), LoadError> {
    if found != YEAR_COUNT {
        return Err(LoadError::LengthMismatch {
            column,
            expected: YEAR_COUNT,
            found,
        });
    }
    Ok(())
}

/// Parses a column-oriented literal into records, preserving its row order.
///
/// Every column must hold exactly one finite value per fiscal year and the
/// `year` column must cover 2009-2024 with no repeats.
pub fn parse_columns(json: &str) -> Result<Vec<Record>, LoadError> {
    let raw: RawColumns = serde_json::from_str(json)?;

    check_len(Metric::Year.label(), raw.year.len())?;
    for (metric, values) in raw.float_columns() {
        check_len(metric.label(), values.len())?;
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(LoadError::NonFinite {
                column: metric.label(),
                year: raw.year[i],
            });
        }
    }

    let mut seen = HashSet::with_capacity(YEAR_COUNT);
    let mut records = Vec::with_capacity(YEAR_COUNT);
    for i in 0..YEAR_COUNT {
        let record = raw.record_at(i);
        record.validate().map_err(|source| LoadError::Invalid {
            year: record.year,
            source,
        })?;
        if !seen.insert(record.year) {
            return Err(LoadError::DuplicateYear(record.year));
        }
        records.push(record);
    }

    if let Some(missing) = (FIRST_YEAR..=LAST_YEAR).find(|year| !seen.contains(year)) {
        return Err(LoadError::MissingYear(missing));
    }

    Ok(records)
}

pub fn load_embedded() -> Result<Vec<Record>, LoadError> {
    parse_columns(EMBEDDED_DATASET)
}
