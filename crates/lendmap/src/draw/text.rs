//! Text rendering for node labels and the diagram title.

use svg::node::element::{TSpan, Text as SvgText};

use crate::{color::Color, geometry::Point};

/// Font and fill settings for a piece of diagram text.
///
/// Labels may span multiple lines (`\n` separated); each line becomes a
/// `<tspan>` positioned so the whole block stays vertically centered on the
/// anchor point.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    font_weight: String,
    color: Color,
}

impl TextDefinition {
    /// Returns the style used for node labels.
    pub fn label() -> Self {
        Self::default()
    }

    /// Returns the style used for the diagram title.
    pub fn title() -> Self {
        Self {
            font_size: 18.0,
            ..Self::default()
        }
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the line height used when stacking label lines.
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.2
    }

    /// Renders `content` centered on `anchor`, one tspan per line.
    pub fn render_to_svg(&self, content: &str, anchor: Point) -> SvgText {
        let lines: Vec<&str> = content.split('\n').collect();
        let line_height = self.line_height();
        // Offset of the first line so the block is centered on the anchor.
        let first_line_y =
            anchor.y() - (lines.len() as f32 - 1.0) / 2.0 * line_height;

        let mut text = SvgText::new("")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.font_family.clone())
            .set("font-size", self.font_size)
            .set("font-weight", self.font_weight.clone())
            .set("fill", &self.color);

        for (index, line) in lines.into_iter().enumerate() {
            let line_y = (index as f32).mul_add(line_height, first_line_y);
            text = text.add(TSpan::new(line).set("x", anchor.x()).set("y", line_y));
        }

        text
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            font_size: 13.0,
            font_weight: "bold".to_string(),
            color: Color::default(),
        }
    }
}
