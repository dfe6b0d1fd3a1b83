//! Configuration types for Cipherflow rendering.
//!
//! All types implement [`serde::Deserialize`] so a front end can load them
//! from an external source such as a TOML file. Fields that are not set
//! fall back to renderer defaults.

use serde::Deserialize;

use cipherflow_core::{color::Color, style::Appearance};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Default appearance mode when the front end does not pass one.
    #[serde(default)]
    theme: Option<Appearance>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, theme: Option<Appearance>) -> Self {
        Self { style, theme }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the configured default appearance, if any.
    pub fn theme(&self) -> Option<Appearance> {
        self.theme
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for exported documents, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_background() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.theme().is_none());
    }

    #[test]
    fn invalid_background_color_is_reported() {
        let style = StyleConfig {
            background_color: Some("not-a-color".to_string()),
        };
        assert!(style.background_color().is_err());
    }

    #[test]
    fn valid_background_color_parses() {
        let style = StyleConfig {
            background_color: Some("#1b1b1d".to_string()),
        };
        assert!(style.background_color().unwrap().is_some());
    }
}
