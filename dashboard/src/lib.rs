// src/lib.rs

pub mod charts;
pub mod config;
pub mod pages;

pub use pages::{render, DashboardError, Page, PageView, RenderedPage};

/// Serializes a rendered page for stdout.
pub fn to_json(page: &RenderedPage, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(page)
    } else {
        serde_json::to_string(page)
    }
}
