//! Visual definitions for diagram elements.
//!
//! Each definition is a stateless description of how an element looks; the
//! exporter feeds it positions and sizes in pixel space and collects the
//! resulting SVG nodes into a [`LayeredOutput`] so z-ordering stays correct
//! regardless of emission order.

mod arrow;
mod layer;
mod shape;
mod text;

pub use arrow::{ArrowDefinition, marker_definitions};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{BoxDefinition, find_rectangle_intersection};
pub use text::TextDefinition;
