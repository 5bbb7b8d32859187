//! `show` command: print the validated configuration.

use super::{OutputFormat, Section};
use anyhow::{Context, Result};
use siteconf::config::ConfigStore;

/// Render the store (or one section of it) in `format`.
pub fn render(
    store: &ConfigStore,
    format: OutputFormat,
    section: Option<Section>,
) -> Result<String> {
    let value = serde_json::to_value(store).context("Failed to serialize configuration")?;
    let value = match section {
        None => value,
        Some(section) => {
            let key = section.key();
            let inner = value.get(key).cloned().unwrap_or_default();
            // Keep the section key so the TOML output stays a table.
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), inner);
            serde_json::Value::Object(map)
        }
    };

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&value).context("Failed to render JSON"),
        OutputFormat::Toml => toml::to_string_pretty(&value).context("Failed to render TOML"),
    }
}

pub fn run(store: &ConfigStore, format: OutputFormat, section: Option<Section>) -> Result<()> {
    println!("{}", render(store, format, section)?);
    Ok(())
}
