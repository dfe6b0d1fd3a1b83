//! Appearance modes and node visual styles.
//!
//! The ambient site theme is reduced to a binary [`Appearance`] that is
//! injected into the renderer explicitly. Node producers never read theme
//! state themselves; they receive a [`StyleHelper`] and a dark flag and pick
//! a color token per node.

use serde::Deserialize;

/// Binary appearance mode derived from the ambient site theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Returns true for the dark appearance mode.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolved visual style for a single node.
///
/// Everything except the fill color is fixed: white text, no border,
/// rounded corners, 14px label text with 10x20 padding. Only the fill
/// varies between appearance modes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    fill: String,
}

impl NodeStyle {
    /// Corner radius of the node rectangle.
    pub const CORNER_RADIUS: f32 = 8.0;

    /// Label font size.
    pub const FONT_SIZE: f32 = 14.0;

    /// Vertical padding between label and node boundary.
    pub const PADDING_VERTICAL: f32 = 10.0;

    /// Horizontal padding between label and node boundary.
    pub const PADDING_HORIZONTAL: f32 = 20.0;

    /// Label text color, identical in both appearance modes.
    pub const TEXT_COLOR: &'static str = "#fff";

    /// Returns the fill color token for this style.
    pub fn fill(&self) -> &str {
        &self.fill
    }
}

/// Style helper handed to node producers.
///
/// Maps a color token to a [`NodeStyle`] so that producers can tint nodes
/// without owning any theme knowledge beyond the dark flag they receive
/// alongside this helper.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleHelper {
    _private: (),
}

impl StyleHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a color token into a node style with that fill.
    pub fn solid(&self, fill: &str) -> NodeStyle {
        NodeStyle {
            fill: fill.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_dark_flag() {
        assert!(!Appearance::Light.is_dark());
        assert!(Appearance::Dark.is_dark());
        assert_eq!(Appearance::default(), Appearance::Light);
    }

    #[test]
    fn style_helper_preserves_fill_token() {
        let helper = StyleHelper::new();
        let style = helper.solid("#6366f1");
        assert_eq!(style.fill(), "#6366f1");
    }

    #[test]
    fn identical_tokens_resolve_identically() {
        let helper = StyleHelper::new();
        assert_eq!(helper.solid("#818cf8"), helper.solid("#818cf8"));
        assert_ne!(helper.solid("#818cf8"), helper.solid("#6366f1"));
    }
}
