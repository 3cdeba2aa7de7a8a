// src/pages.rs

use crate::charts::{self, ChartSection};
use crate::config::DashboardSettings;
use chrono::{DateTime, Utc};
use financial_data::{DatasetError, FinancialDataset, Record, SummaryTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DASHBOARD_TITLE: &str = "Apple Financial Dashboard (2009-2024)";

const DESCRIPTION: &str = "Explore Apple's financial performance during its transformative years. \
This dashboard provides key metrics like revenue, profit, and EPS, trends over time with \
interactive graphs, and insights into Apple's financial strategy and growth trajectory.";

const FEATURES: [&str; 4] = [
    "Year: Fiscal year.",
    "Revenue, Gross Profit, Net Income: Key financial metrics (in millions).",
    "EPS: Earnings per share (in USD).",
    "Assets, Liabilities, Debt: Balance sheet items (in millions).",
];

const KEY_TAKEAWAYS: &str = include_str!("../content/key_takeaways.md");

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Unknown page '{0}' (expected overview, visualizations or key-takeaways)")]
    UnknownPage(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Overview,
    Visualizations,
    KeyTakeaways,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Overview, Page::Visualizations, Page::KeyTakeaways];

    /// Navigation tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Visualizations => "Visualizations",
            Page::KeyTakeaways => "Key Takeaways",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "overview" => Ok(Page::Overview),
            "visualizations" => Ok(Page::Visualizations),
            "key-takeaways" => Ok(Page::KeyTakeaways),
            _ => Err(DashboardError::UnknownPage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPage {
    pub title: String,
    pub description: String,
    pub head: Vec<Record>,
    pub features: Vec<String>,
    pub summary: SummaryTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationsPage {
    pub header: String,
    pub sections: Vec<ChartSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyTakeawaysPage {
    pub header: String,
    pub markdown: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Overview(OverviewPage),
    Visualizations(VisualizationsPage),
    KeyTakeaways(KeyTakeawaysPage),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub dashboard: String,
    pub navigation: Vec<&'static str>,
    pub rendered_at: DateTime<Utc>,
    #[serde(flatten)]
    pub view: PageView,
}

pub fn overview(dataset: &FinancialDataset, head_rows: i64) -> Result<OverviewPage, DashboardError> {
    Ok(OverviewPage {
        title: "Dataset Overview".to_string(),
        description: DESCRIPTION.to_string(),
        head: dataset.head_rows(head_rows)?.to_vec(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        summary: dataset.summary_statistics(),
    })
}

pub fn visualizations(dataset: &FinancialDataset) -> Result<VisualizationsPage, DashboardError> {
    Ok(VisualizationsPage {
        header: "Interactive Financial Graphs".to_string(),
        sections: charts::all_sections(dataset)?,
    })
}

pub fn key_takeaways() -> KeyTakeawaysPage {
    KeyTakeawaysPage {
        header: "Key Insights and Takeaways".to_string(),
        markdown: KEY_TAKEAWAYS.to_string(),
        footer: "Explore detailed visualizations in the Visualizations tab to gain deeper \
                 insights into Apple's financial journey!"
            .to_string(),
    }
}

/// Builds the view model of one navigation tab.
pub fn render(
    page: Page,
    dataset: &FinancialDataset,
    settings: &DashboardSettings,
) -> Result<RenderedPage, DashboardError> {
    tracing::info!(page = %page, "rendering page");

    let view = match page {
        Page::Overview => PageView::Overview(overview(dataset, i64::from(settings.head_rows))?),
        Page::Visualizations => PageView::Visualizations(visualizations(dataset)?),
        Page::KeyTakeaways => PageView::KeyTakeaways(key_takeaways()),
    };

    Ok(RenderedPage {
        dashboard: DASHBOARD_TITLE.to_string(),
        navigation: Page::ALL.iter().map(|p| p.title()).collect(),
        rendered_at: Utc::now(),
        view,
    })
}
