//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use speedctl::config::Config;
use speedctl::theme::current_theme;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_override: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_override)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_override: Option<&Path>) -> Result<()> {
    println!("{}", super::config_path(config_override)?.display());
    Ok(())
}

/// Write a default config file.
///
/// Refuses to overwrite an existing file unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_override: Option<&Path>, force: bool) -> Result<()> {
    let config_path = super::config_path(config_override)?;
    let theme = current_theme();

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", config_path.display()))
    );
    Ok(())
}
