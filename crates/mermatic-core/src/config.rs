//! Rendering configuration serialized into the frontmatter block.
//!
//! This module provides [`DiagramConfig`], the subset of the Mermaid
//! frontmatter `config:` vocabulary the builders expose. A config equal to
//! its all-defaults form is treated as absent by the frontmatter emitter,
//! so an empty `DiagramConfig::default()` never produces a header block on
//! its own.

use serde::{Deserialize, Serialize};

/// Rendering configuration merged into the frontmatter header.
///
/// All fields are optional; fields left unset are omitted from the
/// serialized YAML entirely.
///
/// # Example
///
/// ```
/// use mermatic_core::{DiagramConfig, Theme};
///
/// let config = DiagramConfig::new().with_theme(Theme::Dark);
/// assert_eq!(config.theme(), Some(Theme::Dark));
/// assert!(!config.is_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Color theme for the rendered diagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,

    /// Visual look of node shapes and edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    look: Option<Look>,

    /// Layout algorithm selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layout: Option<ChartLayout>,
}

impl DiagramConfig {
    /// Creates an empty configuration equal to the all-defaults form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the visual look.
    pub fn with_look(mut self, look: Look) -> Self {
        self.look = Some(look);
        self
    }

    /// Sets the layout algorithm.
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Returns the configured theme.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// Returns the configured look.
    pub fn look(&self) -> Option<Look> {
        self.look
    }

    /// Returns the configured layout algorithm.
    pub fn layout(&self) -> Option<ChartLayout> {
        self.layout
    }

    /// Returns true when this config equals the all-defaults form.
    ///
    /// Structural equality against a canonical default instance, as the
    /// frontmatter presence rule requires.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Mermaid color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The stock Mermaid theme.
    Default,
    /// Base theme intended for customization.
    Base,
    /// Dark backgrounds.
    Dark,
    /// Green-tinted theme.
    Forest,
    /// Low-saturation theme.
    Neutral,
}

/// Visual look of shapes and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Look {
    /// The classic Mermaid look.
    Classic,
    /// Sketchy, hand-drawn strokes.
    HandDrawn,
    /// The neo look.
    Neo,
}

/// Layout algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLayout {
    /// The default dagre layout.
    Dagre,
    /// Eclipse Layout Kernel.
    Elk,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_default() {
        assert!(DiagramConfig::new().is_default());
        assert!(DiagramConfig::default().is_default());
    }

    #[test]
    fn test_configured_config_is_not_default() {
        assert!(!DiagramConfig::new().with_theme(Theme::Forest).is_default());
        assert!(!DiagramConfig::new().with_look(Look::HandDrawn).is_default());
        assert!(!DiagramConfig::new().with_layout(ChartLayout::Elk).is_default());
    }

    #[test]
    fn test_serde_names() {
        let config = DiagramConfig::new()
            .with_theme(Theme::Dark)
            .with_look(Look::HandDrawn);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(yaml, "theme: dark\nlook: handDrawn\n");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let config = DiagramConfig::new().with_layout(ChartLayout::Dagre);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(yaml, "layout: dagre\n");
    }
}
