//! Configuration file loading for the Cipherflow CLI.

use std::fs;

use log::debug;

use cipherflow::{CipherflowError, config::AppConfig};

/// Loads the application configuration from an optional TOML file path.
///
/// Returns the default configuration when no path is given.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CipherflowError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    debug!(config_path = path; "Loading configuration file");
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| CipherflowError::Config(format!("Failed to parse '{path}': {err}")))
}
