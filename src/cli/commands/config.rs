//! Config Command
//!
//! Inspect copyforge configuration.
//!
//! Usage:
//!   copyforge config show [-f json]
//!   copyforge config path

use crate::config::ConfigLoader;
use crate::types::{CopyError, Result};

/// Show the merged effective configuration. API keys are never serialized.
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| CopyError::Config(format!("Cannot render configuration: {}", e)))?;
        println!("# Effective configuration (merged from all sources)\n");
        println!("{}", rendered);
    }

    Ok(())
}

/// Show configuration file paths and whether each exists.
pub fn path() -> Result<()> {
    if let Some(global) = ConfigLoader::global_config_path() {
        let marker = if global.exists() { "" } else { " (not found)" };
        println!("Global:  {}{}", global.display(), marker);
    } else {
        println!("Global:  cannot determine config directory");
    }

    let project = ConfigLoader::project_config_path();
    let marker = if project.exists() { "" } else { " (not found)" };
    println!("Project: {}{}", project.display(), marker);

    Ok(())
}
