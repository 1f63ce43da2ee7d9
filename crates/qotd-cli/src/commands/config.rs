//! Config command handlers

use anyhow::{bail, Context, Result};

use qotd_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "server_url": config.server_url,
                    "sync_enabled": config.sync_enabled,
                    "fetch_limit": config.fetch_limit
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:     {}", config.data_dir.display());
            println!(
                "  server_url:   {}",
                config.server_url.as_deref().unwrap_or("(not set)")
            );
            println!("  sync_enabled: {}", config.sync_enabled);
            println!("  fetch_limit:  {}", config.fetch_limit);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "server_url" => {
            config.server_url = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        "sync_enabled" => {
            config.sync_enabled = value
                .parse()
                .context("Invalid value for sync_enabled. Use 'true' or 'false'.")?;
        }
        "fetch_limit" => {
            config.fetch_limit = value
                .parse()
                .context("Invalid value for fetch_limit. Use a positive integer.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, server_url, sync_enabled, fetch_limit",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
