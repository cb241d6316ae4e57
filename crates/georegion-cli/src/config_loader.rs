//! Configuration loading utilities for CLI commands

use crate::errors;
use anyhow::{Context, Result};
use georegion_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "georegion.toml";

/// Load layered configuration: defaults, then the config file, then
/// environment variables
pub fn load_config(explicit_path: Option<&Path>) -> Result<LayeredConfig> {
    let config = match resolve_config_path(explicit_path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            LayeredConfig::with_defaults()
                .load_from_file(&path)
                .with_context(|| format!("Failed to load configuration file: {}", path.display()))?
        }
        None => LayeredConfig::with_defaults(),
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    explicit_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(explicit_path)?;
    config.update_from_cli(overrides).map_err(|e| errors::invalid_option(&e))?;
    Ok(config)
}

/// An explicit path must exist; the default file is optional
fn resolve_config_path(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            return Err(errors::config_not_found(path).into());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let default_path = std::env::current_dir()?.join(DEFAULT_CONFIG_FILE);
    Ok(default_path.exists().then_some(default_path))
}
