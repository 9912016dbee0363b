//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use tracing::debug;

use cardex_core::CardexConfig;

/// Load the configuration from an explicit path, the default location, or
/// fall back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardexConfig> {
    if let Some(path) = config_path {
        debug!("Loading configuration from {}", path);
        return Ok(CardexConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(CardexConfig::from_file(&default_path)?)
    } else {
        Ok(CardexConfig::default())
    }
}
