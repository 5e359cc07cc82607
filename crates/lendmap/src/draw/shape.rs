//! The rounded-rectangle node box.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Visual definition of a node box: a rounded rectangle with a fill and an
/// outline. Stateless; the exporter supplies position and size per node.
#[derive(Debug, Clone)]
pub struct BoxDefinition {
    fill_color: Color,
    line_color: Color,
    line_width: f32,
    corner_radius: f32,
}

impl BoxDefinition {
    /// Returns the box fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Returns the outline color.
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    /// Returns the outline width in pixels.
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Returns the corner radius in pixels.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Sets the box fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Sets the outline color.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    /// Renders this box to an SVG rectangle element.
    ///
    /// # Arguments
    ///
    /// * `size` - The pixel dimensions of the box.
    /// * `position` - The center position of the box in pixel space.
    pub fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let bounds = position.to_bounds(size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", self.corner_radius)
            .set("fill", &self.fill_color)
            .set("fill-opacity", self.fill_color.alpha())
            .set("stroke", &self.line_color)
            .set("stroke-opacity", self.line_color.alpha())
            .set("stroke-width", self.line_width);

        rect.into()
    }
}

impl Default for BoxDefinition {
    fn default() -> Self {
        Self {
            fill_color: Color::new("lightblue").expect("'lightblue' is a valid CSS color"),
            line_color: Color::default(),
            line_width: 1.0,
            corner_radius: 12.0,
        }
    }
}

/// Finds where the ray from a box center toward an external point crosses
/// the box boundary.
///
/// `a` is the box center, `b` the external point, `a_size` the box size. The
/// ray starts at the center, so the first crossing is the nearer of the
/// horizontal and vertical slab exits. Degenerate inputs fall back rather
/// than producing NaN: coincident points return `b`, a zero-size box returns
/// `a`.
pub fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let dist = b.sub_point(a);
    let length = dist.hypot();
    if length < 0.001 {
        return b;
    }

    let dx = dist.x() / length;
    let dy = dist.y() / length;

    // Distance along the ray to the vertical and horizontal edge pairs.
    let t_vertical = if dx == 0.0 {
        f32::INFINITY
    } else {
        (a_size.width() / 2.0) / dx.abs()
    };
    let t_horizontal = if dy == 0.0 {
        f32::INFINITY
    } else {
        (a_size.height() / 2.0) / dy.abs()
    };

    let t = t_vertical.min(t_horizontal);
    if !t.is_finite() {
        return b;
    }

    Point::new(dx.mul_add(t, a.x()), dy.mul_add(t, a.y()))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..500.0, 1.0f32..500.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// The intersection result must have finite coordinates.
    fn check_intersection_is_finite(a: Point, b: Point, size: Size) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);
        prop_assert!(result.x().is_finite());
        prop_assert!(result.y().is_finite());
        Ok(())
    }

    /// The intersection lies within the box's bounding rectangle (it is an
    /// exit point of a ray that starts at the center).
    fn check_intersection_within_box(a: Point, b: Point, size: Size) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);
        if result == b {
            // Fallback case for degenerate rays.
            return Ok(());
        }
        let bounds = a.to_bounds(size);
        prop_assert!(result.x() >= bounds.min_x() - 0.01);
        prop_assert!(result.x() <= bounds.max_x() + 0.01);
        prop_assert!(result.y() >= bounds.min_y() - 0.01);
        prop_assert!(result.y() <= bounds.max_y() + 0.01);
        Ok(())
    }

    proptest! {
        #[test]
        fn intersection_is_finite(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_is_finite(a, b, size)?;
        }

        #[test]
        fn intersection_within_box(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_within_box(a, b, size)?;
        }
    }
}
