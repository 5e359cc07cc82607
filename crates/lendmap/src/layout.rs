//! Mapping from diagram space to SVG pixel space.
//!
//! The use-case dataset is authored on a fixed grid (x and y from 0 to 10,
//! y pointing up, the way the diagram reads on paper). SVG puts the origin
//! at the top-left with y pointing down, so the projection flips the y-axis
//! and scales each axis independently onto the configured canvas. A wide
//! canvas over a square grid stretches boxes horizontally, which is exactly
//! how the diagram is meant to look.

use serde::Deserialize;

use crate::geometry::{Point, Size};

/// Pixel dimensions of the output document and the margin reserved around
/// the drawing area. The title renders inside the top margin.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Total document width in pixels.
    width: f32,
    /// Total document height in pixels.
    height: f32,
    /// Margin around the drawing area in pixels.
    margin: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Returns the total document size in pixels.
    pub fn document_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the margin around the drawing area.
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl Default for Canvas {
    fn default() -> Self {
        // A 16:10 canvas over the square grid.
        Self {
            width: 1280.0,
            height: 800.0,
            margin: 60.0,
        }
    }
}

/// Projects diagram-space coordinates onto a [`Canvas`].
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    canvas: Canvas,
    grid_max_x: f32,
    grid_max_y: f32,
}

impl Projection {
    /// Grid extent of the authoring space, matching the dataset coordinates.
    pub const GRID_MAX: f32 = 10.0;

    /// Creates a projection from the standard 10x10 grid onto the canvas.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            grid_max_x: Self::GRID_MAX,
            grid_max_y: Self::GRID_MAX,
        }
    }

    fn scale_x(&self) -> f32 {
        (self.canvas.document_size().width() - 2.0 * self.canvas.margin()) / self.grid_max_x
    }

    fn scale_y(&self) -> f32 {
        (self.canvas.document_size().height() - 2.0 * self.canvas.margin()) / self.grid_max_y
    }

    /// Projects a diagram-space point into pixel space, flipping the y-axis.
    pub fn project_point(&self, point: Point) -> Point {
        let margin = self.canvas.margin();
        Point::new(
            point.x().mul_add(self.scale_x(), margin),
            (self.grid_max_y - point.y()).mul_add(self.scale_y(), margin),
        )
    }

    /// Projects a diagram-space size into pixel space.
    ///
    /// Sizes scale axis-independently; orientation does not apply.
    pub fn project_size(&self, size: Size) -> Size {
        Size::new(
            size.width() * self.scale_x(),
            size.height() * self.scale_y(),
        )
    }

    /// Returns the total document size in pixels.
    pub fn document_size(&self) -> Size {
        self.canvas.document_size()
    }

    /// Returns the pixel anchor for the document title: horizontally
    /// centered, vertically in the middle of the top margin.
    pub fn title_anchor(&self) -> Point {
        Point::new(
            self.canvas.document_size().width() / 2.0,
            self.canvas.margin() / 2.0,
        )
    }
}
