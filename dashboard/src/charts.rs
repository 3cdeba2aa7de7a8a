// src/charts.rs

use financial_data::{DatasetError, FinancialDataset, Metric};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisRef {
    #[serde(rename = "y")]
    Primary,
    #[serde(rename = "y2")]
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    PlotlyWhite,
    PlotlyDark,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<i32>>,
}

impl Axis {
    fn titled(title: &str) -> Self {
        Axis {
            title: title.to_string(),
            range: None,
            tick_format: None,
            tick_values: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub kind: TraceKind,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub axis: AxisRef,
    pub markers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub template: Template,
    pub show_legend: bool,
    pub traces: Vec<Trace>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSection {
    pub subheader: String,
    pub chart: ChartSpec,
}

fn trace(
    dataset: &FinancialDataset,
    metric: Metric,
    name: &str,
    kind: TraceKind,
    color: &str,
) -> Result<Trace, DatasetError> {
    Ok(Trace {
        name: name.to_string(),
        kind,
        x: dataset.years(),
        y: dataset.column(metric.label())?,
        color: Some(color.to_string()),
        axis: AxisRef::Primary,
        markers: kind == TraceKind::Line,
        text: None,
    })
}

fn chart(title: &str, y_title: &str, traces: Vec<Trace>) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        x_axis: Axis::titled("Year"),
        y_axis: Axis::titled(y_title),
        secondary_y_axis: None,
        bar_mode: None,
        template: Template::PlotlyWhite,
        show_legend: true,
        traces,
    }
}

pub fn revenue_vs_net_income(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    Ok(chart(
        "Revenue vs Net Income",
        "Amount (in Millions)",
        vec![
            trace(dataset, Metric::Revenue, "Revenue", TraceKind::Line, "blue")?,
            trace(dataset, Metric::NetIncome, "Net Income", TraceKind::Line, "green")?,
        ],
    ))
}

pub fn eps_growth(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    Ok(chart(
        "Earnings Per Share Growth (2009-2024)",
        "Earnings Per Share (USD)",
        vec![trace(dataset, Metric::Eps, "EPS", TraceKind::Line, "blue")?],
    ))
}

pub fn assets_vs_liabilities(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    let mut spec = chart(
        "Assets vs Liabilities",
        "Amount (in Millions)",
        vec![
            trace(dataset, Metric::TotalAssets, "Total Assets", TraceKind::Bar, "blue")?,
            trace(dataset, Metric::TotalLiabilities, "Total Liabilities", TraceKind::Bar, "orange")?,
        ],
    );
    spec.bar_mode = Some(BarMode::Group);
    Ok(spec)
}

pub fn cash_on_hand(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    Ok(chart(
        "Cash on Hand (2009-2024)",
        "Cash (in Millions)",
        vec![trace(dataset, Metric::CashOnHand, "Cash on Hand", TraceKind::Line, "blue")?],
    ))
}

/// Revenue bars on the left axis, gross margin scaled by 100 on a 0-100 right axis.
pub fn revenue_vs_gross_margin(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    let revenue = trace(dataset, Metric::Revenue, "Revenue (millions)", TraceKind::Bar, "orange")?;
    let margin = Trace {
        name: "Gross Margin (%)".to_string(),
        kind: TraceKind::Line,
        x: dataset.years(),
        y: dataset.derived_series(Metric::GrossMargin.label(), |x| x * 100.0)?,
        color: Some("red".to_string()),
        axis: AxisRef::Secondary,
        markers: true,
        text: None,
    };

    let mut spec = chart(
        "Revenue vs Gross Margin (2009-2024)",
        "Revenue (in millions)",
        vec![revenue, margin],
    );
    spec.secondary_y_axis = Some(Axis {
        range: Some([0.0, 100.0]),
        ..Axis::titled("Gross Margin (%)")
    });
    spec.bar_mode = Some(BarMode::Group);
    Ok(spec)
}

pub fn pe_ratio(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    Ok(chart(
        "PE Ratio Over Time",
        "Price-to-Earnings Ratio",
        vec![trace(dataset, Metric::PeRatio, "PE ratio", TraceKind::Line, "purple")?],
    ))
}

pub fn employee_growth(dataset: &FinancialDataset) -> Result<ChartSpec, DatasetError> {
    let mut employees = trace(dataset, Metric::Employees, "Employees", TraceKind::Bar, "black")?;
    employees.text = Some(employees.y.iter().map(|v| format!("{v:.0}")).collect());

    let years = employees.x.clone();
    let mut spec = chart(
        "Apple's Employee Growth (2009-2024)",
        "Number of Employees",
        vec![employees],
    );
    spec.x_axis = Axis {
        tick_values: Some(years),
        ..Axis::titled("Fiscal Year")
    };
    spec.y_axis.tick_format = Some(",.0f".to_string());
    spec.template = Template::PlotlyDark;
    spec.show_legend = false;
    Ok(spec)
}

/// Chart sections of the visualizations page, in display order.
pub fn all_sections(dataset: &FinancialDataset) -> Result<Vec<ChartSection>, DatasetError> {
    let builders: [(&str, fn(&FinancialDataset) -> Result<ChartSpec, DatasetError>); 7] = [
        ("Revenue and Net Income Growth (2009-2024)", revenue_vs_net_income),
        ("Earnings Per Share (EPS) Growth", eps_growth),
        ("Assets vs Liabilities", assets_vs_liabilities),
        ("Cash on Hand (Liquidity)", cash_on_hand),
        ("Revenue vs Gross Margin", revenue_vs_gross_margin),
        ("PE Ratio (Valuation)", pe_ratio),
        ("Employee Growth", employee_growth),
    ];

    builders
        .iter()
        .map(|(subheader, build)| {
            Ok(ChartSection {
                subheader: subheader.to_string(),
                chart: build(dataset)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> FinancialDataset {
        FinancialDataset::load().unwrap()
    }

    #[test]
    fn traces_are_year_aligned() {
        let spec = revenue_vs_net_income(&dataset()).unwrap();
        for trace in &spec.traces {
            assert_eq!(trace.x.len(), trace.y.len());
            assert_eq!(trace.x[0], 2024);
        }
        assert_eq!(spec.traces[0].y[0], 391035.0);
        assert_eq!(spec.traces[1].y[15], 8235.0);
    }

    #[test]
    fn gross_margin_is_on_secondary_axis() {
        let spec = revenue_vs_gross_margin(&dataset()).unwrap();
        let margin = &spec.traces[1];
        assert_eq!(margin.axis, AxisRef::Secondary);
        assert_eq!(margin.y[0], 4621.0);
        assert_eq!(spec.secondary_y_axis.unwrap().range, Some([0.0, 100.0]));
    }

    #[test]
    fn employee_bars_carry_text_labels() {
        let spec = employee_growth(&dataset()).unwrap();
        let text = spec.traces[0].text.as_ref().unwrap();
        assert_eq!(text[0], "164000");
        assert_eq!(text[15], "36800");
        assert!(!spec.show_legend);
        assert_eq!(spec.template, Template::PlotlyDark);
    }

    #[test]
    fn seven_sections() {
        let sections = all_sections(&dataset()).unwrap();
        assert_eq!(sections.len(), 7);
        assert_eq!(sections[5].chart.traces[0].color.as_deref(), Some("purple"));
    }

    #[test]
    fn axis_refs_serialize_like_plotly() {
        assert_eq!(serde_json::to_value(AxisRef::Secondary).unwrap(), "y2");
    }
}
