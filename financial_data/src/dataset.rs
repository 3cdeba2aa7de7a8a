// src/dataset.rs

use crate::loader;
use crate::models::{DatasetError, LoadError, Metric, Record};
use crate::stats::{describe, SummaryTable};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Order of the embedded literal (newest first).
    #[default]
    Source,
    Ascending,
    Descending,
}

/// Read-only table of annual financial records.
///
/// Built once at start-up and handed to readers by reference; nothing on
/// this type takes `&mut self`, so it can be shared across threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialDataset {
    records: Vec<Record>,
}

impl FinancialDataset {
    /// Builds the dataset from the literal embedded in the crate.
    pub fn load() -> Result<Self, LoadError> {
        let records = loader::load_embedded()?;
        tracing::debug!(records = records.len(), "financial dataset loaded");
        Ok(FinancialDataset { records })
    }

    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_in(&self, order: SortOrder) -> Vec<Record> {
        let mut records = self.records.clone();
        match order {
            SortOrder::Source => {}
            SortOrder::Ascending => records.sort_by_key(|r| r.year),
            SortOrder::Descending => records.sort_by_key(|r| std::cmp::Reverse(r.year)),
        }
        records
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Values of one column, aligned with [`all_records`](Self::all_records).
    pub fn column(&self, metric_name: &str) -> Result<Vec<f64>, DatasetError> {
        Ok(self.column_of(metric_name.parse()?))
    }

    pub fn column_of(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.value(metric)).collect()
    }

    /// `(year, value)` pairs for one column.
    pub fn series(&self, metric_name: &str) -> Result<Vec<(i32, f64)>, DatasetError> {
        let metric: Metric = metric_name.parse()?;
        Ok(self
            .records
            .iter()
            .map(|r| (r.year, r.value(metric)))
            .collect())
    }

    pub fn record_for_year(&self, year: i32) -> Result<&Record, DatasetError> {
        self.records
            .iter()
            .find(|r| r.year == year)
            .ok_or(DatasetError::NotFound(year))
    }

    pub fn summary_statistics(&self) -> SummaryTable {
        let columns: BTreeMap<_, _> = Metric::ALL
            .iter()
            .filter_map(|&metric| describe(&self.column_of(metric)).map(|stats| (metric, stats)))
            .collect();
        SummaryTable::new(columns)
    }

    /// Applies `transform` to every value of a column, keeping year alignment.
    pub fn derived_series<F>(&self, metric_name: &str, transform: F) -> Result<Vec<f64>, DatasetError>
    where
        F: Fn(f64) -> f64,
    {
        Ok(self.column(metric_name)?.into_iter().map(transform).collect())
    }

    /// First `n` records in source order; saturates at the table length.
    pub fn head_rows(&self, n: i64) -> Result<&[Record], DatasetError> {
        if n < 0 {
            return Err(DatasetError::InvalidArgument(format!(
                "row count must be non-negative, got {n}"
            )));
        }
        let end = usize::try_from(n).map_or(self.records.len(), |n| n.min(self.records.len()));
        Ok(&self.records[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> FinancialDataset {
        FinancialDataset::load().unwrap()
    }

    #[test]
    fn sort_orders() {
        let ds = dataset();
        let asc = ds.records_in(SortOrder::Ascending);
        assert_eq!(asc.first().map(|r| r.year), Some(2009));
        assert_eq!(asc.last().map(|r| r.year), Some(2024));
        assert_eq!(ds.records_in(SortOrder::Source), ds.all_records());
        assert_eq!(ds.records_in(SortOrder::Descending), ds.all_records());
    }

    #[test]
    fn year_column_matches_years() {
        let ds = dataset();
        let years: Vec<f64> = ds.years().into_iter().map(f64::from).collect();
        assert_eq!(ds.column("year").unwrap(), years);
    }

    #[test]
    fn series_pairs_years_with_values() {
        let ds = dataset();
        let series = ds.series("Employees").unwrap();
        assert_eq!(series[0], (2024, 164000.0));
        assert_eq!(series[15], (2009, 36800.0));
    }

    #[test]
    fn head_rows_zero_is_empty() {
        assert!(dataset().head_rows(0).unwrap().is_empty());
    }

    #[test]
    fn summary_covers_every_column() {
        let table = dataset().summary_statistics();
        assert_eq!(table.len(), 16);
        assert_eq!(table[Metric::Year].min, 2009.0);
        assert_eq!(table[Metric::Year].max, 2024.0);
        assert_eq!(table[Metric::Year].median, 2016.5);
    }
}
