// src/main.rs

use dashboard::config::load_config;
use dashboard::{render, to_json, Page};
use financial_data::FinancialDataset;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout carries the page JSON, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;
    let page = match std::env::args().nth(1) {
        Some(name) => name.parse::<Page>()?,
        None => config.dashboard.default_page,
    };

    let dataset = FinancialDataset::load()?;
    let rendered = render(page, &dataset, &config.dashboard)?;
    println!("{}", to_json(&rendered, config.dashboard.pretty)?);
    Ok(())
}
