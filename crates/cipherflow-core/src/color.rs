//! Color handling for diagram styling.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Provides parsing of CSS color strings and stable string output for use
/// as SVG attribute values.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// Parses CSS color strings such as "#6366f1", "rgb(255, 0, 0)" or
    /// "white".
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
