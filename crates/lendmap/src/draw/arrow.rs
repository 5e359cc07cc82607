//! Directed arrows between node boxes.
//!
//! Arrowheads are SVG markers, one marker definition per color in use, so a
//! single `<defs>` block serves every arrow in the document.

use svg::node::element::{Definitions, Marker, Path};

use crate::{color::Color, geometry::Point};

/// Visual definition of an edge arrow: a straight stroked path with a
/// triangular marker head at the target end.
#[derive(Debug, Clone)]
pub struct ArrowDefinition {
    color: Color,
    width: f32,
}

impl ArrowDefinition {
    /// Returns the arrow color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the arrow stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the arrow color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Renders a straight arrow from `start` to `end` in pixel space.
    ///
    /// The path references the marker emitted by [`marker_definitions`] for
    /// this arrow's color; the marker orients itself along the path.
    pub fn render_to_svg(&self, start: Point, end: Point) -> Path {
        Path::new()
            .set("d", path_data(start, end))
            .set("fill", "none")
            .set("stroke", &self.color)
            .set("stroke-opacity", self.color.alpha())
            .set("stroke-width", self.width)
            .set("marker-end", format!("url(#{})", marker_id(self.color)))
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self {
            color: Color::new("gray").expect("'gray' is a valid CSS color"),
            width: 2.0,
        }
    }
}

/// Returns the marker element id used for arrowheads of the given color.
pub fn marker_id(color: Color) -> String {
    format!("arrow-head-{}", color.to_id_safe_string())
}

/// Creates marker definitions for the arrowhead of each color in use.
pub fn marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: IntoIterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let head = Marker::new()
            .set("id", marker_id(*color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(head);
    }

    defs
}

fn path_data(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_path_references_marker() {
        let arrow = ArrowDefinition::default();
        let svg = arrow
            .render_to_svg(Point::new(0.0, 0.0), Point::new(100.0, 50.0))
            .to_string();

        assert!(svg.contains("M 0 0 L 100 50"));
        assert!(svg.contains("marker-end"));
        assert!(svg.contains(&marker_id(arrow.color())));
    }

    #[test]
    fn test_marker_definitions_one_per_color() {
        let colors = vec![Color::new("gray").unwrap(), Color::new("red").unwrap()];
        let defs = marker_definitions(&colors).to_string();

        assert_eq!(defs.matches("<marker").count(), 2);
        assert!(defs.contains(&marker_id(colors[0])));
        assert!(defs.contains(&marker_id(colors[1])));
    }

    #[test]
    fn test_marker_id_is_svg_safe() {
        let id = marker_id(Color::new("#ff8000").unwrap());
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
    }
}
