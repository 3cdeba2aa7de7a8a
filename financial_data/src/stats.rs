// src/stats.rs

use crate::models::{DatasetError, Metric};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;

/// One column of a describe-style summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub p25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub p75: f64,
    pub max: f64,
}

/// Quantile of already-sorted values by linear interpolation at (n - 1) * q.
///
/// `q` is clamped to [0, 1]. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let fraction = h - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Describes a column: count, mean, sample std, min, quartiles, max.
///
/// A single value has an undefined sample deviation and yields NaN for `std`.
pub fn describe(values: &[f64]) -> Option<SummaryStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by_key(|v| OrderedFloat(*v));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Some(SummaryStatistics {
        count,
        mean,
        std,
        min: sorted[0],
        p25: quantile(&sorted, 0.25)?,
        median: quantile(&sorted, 0.5)?,
        p75: quantile(&sorted, 0.75)?,
        max: sorted[count - 1],
    })
}

/// Per-metric statistics, iterated in source column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SummaryTable {
    columns: BTreeMap<Metric, SummaryStatistics>,
}

impl SummaryTable {
    pub(crate) fn new(columns: BTreeMap<Metric, SummaryStatistics>) -> Self {
        SummaryTable { columns }
    }

    pub fn get(&self, label: &str) -> Result<&SummaryStatistics, DatasetError> {
        let metric: Metric = label.parse()?;
        self.columns
            .get(&metric)
            .ok_or_else(|| DatasetError::UnknownMetric(label.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &SummaryStatistics)> {
        self.columns.iter().map(|(metric, stats)| (*metric, stats))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Index<Metric> for SummaryTable {
    type Output = SummaryStatistics;

    fn index(&self, metric: Metric) -> &Self::Output {
        &self.columns[&metric]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate_between_order_statistics() {
        let stats = describe(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.p25, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.p75, 3.25);
    }

    #[test]
    fn std_uses_sample_denominator() {
        let stats = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        // population std would be exactly 2.0
        assert!((stats.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_nan_std() {
        let stats = describe(&[3.5]).unwrap();
        assert_eq!(stats.median, 3.5);
        assert!(stats.std.is_nan());
    }

    #[test]
    fn empty_input() {
        assert!(describe(&[]).is_none());
        assert!(quantile(&[], 0.5).is_none());
    }

    #[test]
    fn quantile_bounds_are_min_and_max() {
        let sorted = [1.0, 2.0, 10.0];
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 1.0), Some(10.0));
        assert_eq!(quantile(&sorted, 0.5), Some(2.0));
    }

    #[test]
    fn serializes_with_describe_keys() {
        let stats = describe(&[1.0, 2.0]).unwrap();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["50%"], serde_json::json!(1.5));
        assert_eq!(json["count"], serde_json::json!(2));
    }
}
