// src/lib.rs

pub mod dataset;
pub mod loader;
pub mod models;
pub mod stats;

pub use dataset::{FinancialDataset, SortOrder};
pub use models::{DatasetError, LoadError, Metric, Record, Unit};
pub use stats::{SummaryStatistics, SummaryTable};
