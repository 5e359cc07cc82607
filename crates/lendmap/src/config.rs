//! Configuration types for diagram rendering.
//!
//! [`AppConfig`] combines the canvas geometry and visual styling into a
//! single root that can be deserialized from an external source (the CLI
//! loads it from TOML). Every field has a default matching the appearance of
//! the shipped use-case diagram.

use serde::Deserialize;

use crate::{color::Color, layout::Canvas};

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: Canvas,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style.
    pub fn new(canvas: Canvas, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the renderer defaults (light blue
/// boxes with black outlines, gray arrows, no background).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the document, as a color string. When unset
    /// the document has no background rectangle.
    #[serde(default)]
    background_color: Option<String>,

    /// Fill [`Color`] for node boxes, as a color string.
    #[serde(default)]
    node_fill_color: Option<String>,

    /// Stroke [`Color`] for arrows, as a color string.
    #[serde(default)]
    arrow_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration from raw color strings.
    ///
    /// Strings are validated lazily by the accessor methods, matching how
    /// deserialized configurations behave.
    pub fn new(
        background_color: Option<String>,
        node_fill_color: Option<String>,
        arrow_color: Option<String>,
    ) -> Self {
        Self {
            background_color,
            node_fill_color,
            arrow_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.background_color.as_deref(), "background_color")
    }

    /// Returns the parsed node fill [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn node_fill_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.node_fill_color.as_deref(), "node_fill_color")
    }

    /// Returns the parsed arrow [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn arrow_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.arrow_color.as_deref(), "arrow_color")
    }
}

fn parse_optional_color(value: Option<&str>, field: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("invalid {field} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
        assert!(config.style().node_fill_color().unwrap().is_none());
        assert!(config.style().arrow_color().unwrap().is_none());
    }

    #[test]
    fn test_style_parses_configured_colors() {
        let style = StyleConfig {
            background_color: Some("white".to_string()),
            node_fill_color: Some("#abcdef".to_string()),
            arrow_color: None,
        };

        assert!(style.background_color().unwrap().is_some());
        assert!(style.node_fill_color().unwrap().is_some());
        assert!(style.arrow_color().unwrap().is_none());
    }

    #[test]
    fn test_style_rejects_invalid_color() {
        let style = StyleConfig {
            background_color: Some("definitely-not-a-color".to_string()),
            node_fill_color: None,
            arrow_color: None,
        };

        let err = style.background_color().unwrap_err();
        assert!(err.contains("background_color"));
    }
}
