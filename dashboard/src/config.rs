// src/config.rs

use crate::pages::Page;
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Config {
    #[validate(nested)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct DashboardSettings {
    pub default_page: Page,
    /// Rows shown in the overview table.
    #[validate(range(min = 1, max = 16))]
    pub head_rows: u8,
    /// Pretty-print the JSON written to stdout.
    #[serde(default)]
    pub pretty: bool,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[dashboard]
default_page = "overview"
head_rows = 5
pretty = true
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml next to the executable,
/// falling back to the embedded default.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                return load_config_from(&config_path);
            }
            tracing::debug!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}
