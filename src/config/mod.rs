//! Configuration management module

use anyhow::{Context, Result};

use crate::model::Config;

/// Load the aliaser configuration, falling back to defaults when the file
/// does not exist yet
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();

    if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "loading configuration");
        Config::load().with_context(|| format!("Invalid configuration in {}", config_path.display()))
    } else {
        tracing::debug!(path = %config_path.display(), "no configuration file, using defaults");
        Ok(Config::default())
    }
}
