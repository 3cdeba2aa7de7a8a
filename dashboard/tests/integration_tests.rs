// tests/integration_tests.rs

use dashboard::config::{parse_config, DEFAULT_CONFIG};
use dashboard::{render, to_json, Page, PageView};
use financial_data::FinancialDataset;
use more_asserts::assert_ge;
use std::error::Error;

#[test]
fn test_overview_page_json() -> Result<(), Box<dyn Error>> {
    let config = parse_config(DEFAULT_CONFIG)?;
    let dataset = FinancialDataset::load()?;

    let rendered = render(Page::Overview, &dataset, &config.dashboard)?;
    let json: serde_json::Value = serde_json::from_str(&to_json(&rendered, false)?)?;

    assert_eq!(json["page"], "overview");
    assert_eq!(json["dashboard"], "Apple Financial Dashboard (2009-2024)");
    assert_eq!(json["navigation"], serde_json::json!(["Overview", "Visualizations", "Key Takeaways"]));
    assert_eq!(json["head"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["head"][0]["year"], 2024);
    assert_eq!(json["head"][0]["Revenue (millions)"], 391035.0);
    assert_eq!(json["summary"]["EPS"]["max"], 6.13);
    assert_eq!(json["summary"]["EPS"]["min"], 0.32);
    assert_eq!(json["summary"]["EPS"]["count"], 16);
    assert!(json["rendered_at"].is_string());
    Ok(())
}

#[test]
fn test_visualizations_page() -> Result<(), Box<dyn Error>> {
    let config = parse_config(DEFAULT_CONFIG)?;
    let dataset = FinancialDataset::load()?;

    let rendered = render(Page::Visualizations, &dataset, &config.dashboard)?;
    let PageView::Visualizations(page) = rendered.view else {
        panic!("expected the visualizations view");
    };

    assert_eq!(page.sections.len(), 7);
    for section in &page.sections {
        assert_ge!(section.chart.traces.len(), 1);
        for trace in &section.chart.traces {
            assert_eq!(trace.x, dataset.years());
            assert_eq!(trace.y.len(), 16);
        }
    }

    let margin = &page.sections[4].chart.traces[1];
    assert_eq!(margin.name, "Gross Margin (%)");
    assert_eq!(margin.y[0], 4621.0);
    Ok(())
}

#[test]
fn test_key_takeaways_page() -> Result<(), Box<dyn Error>> {
    let config = parse_config(DEFAULT_CONFIG)?;
    let dataset = FinancialDataset::load()?;

    let rendered = render(Page::KeyTakeaways, &dataset, &config.dashboard)?;
    let json = serde_json::to_value(&rendered)?;

    assert_eq!(json["page"], "key-takeaways");
    assert!(json["markdown"].as_str().unwrap_or_default().contains("PE Ratio"));
    Ok(())
}

#[test]
fn test_head_rows_follow_config() -> Result<(), Box<dyn Error>> {
    let config = parse_config(
        r#"
[dashboard]
default_page = "overview"
head_rows = 16
"#,
    )?;
    let dataset = FinancialDataset::load()?;

    let rendered = render(config.dashboard.default_page, &dataset, &config.dashboard)?;
    let PageView::Overview(page) = rendered.view else {
        panic!("expected the overview view");
    };
    assert_eq!(page.head.as_slice(), dataset.all_records());
    Ok(())
}

#[test]
fn test_rendering_does_not_change_dataset() -> Result<(), Box<dyn Error>> {
    let config = parse_config(DEFAULT_CONFIG)?;
    let dataset = FinancialDataset::load()?;
    let before = dataset.clone();

    for page in Page::ALL {
        render(page, &dataset, &config.dashboard)?;
    }

    assert_eq!(dataset, before);
    Ok(())
}
