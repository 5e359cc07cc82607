//! lendmap - renders the LendLink cross-chain lending use-case flowchart.
//!
//! The diagram is a fixed dataset: labeled boxes at hardcoded grid
//! coordinates and directed arrows between them, drawn in a single pass and
//! exported as SVG. The [`usecase`] module carries the shipped dataset; the
//! [`Diagram`] type also supports building other flowcharts
//! programmatically.

pub mod color;
pub mod config;
pub mod diagram;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod usecase;

mod error;
mod export;

pub use diagram::{Diagram, DiagramError, Edge};
pub use error::LendmapError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::SvgExporter;

/// Renders diagrams to SVG with a fixed configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use lendmap::{DiagramRenderer, config::AppConfig, usecase};
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
/// let diagram = usecase::lendlink_diagram();
///
/// let svg = renderer.render_svg(&diagram)
///     .expect("Failed to render");
/// println!("{svg}");
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Creates a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Renders a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `LendmapError` for diagram validation errors (an edge
    /// endpoint with no matching node) or invalid configured colors.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, LendmapError> {
        info!(
            node_count = diagram.node_count(),
            edge_count = diagram.edges().len();
            "Rendering diagram"
        );

        diagram.validate()?;
        debug!("Diagram validated");

        let exporter = SvgExporter::new(&self.config)?;
        let document = exporter.render_document(diagram)?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Renders a diagram and writes the SVG to the given file.
    ///
    /// # Errors
    ///
    /// Returns `LendmapError` for validation errors or if the output file
    /// cannot be written.
    pub fn write_svg(
        &self,
        diagram: &Diagram,
        output_path: impl AsRef<Path>,
    ) -> Result<(), LendmapError> {
        diagram.validate()?;

        let exporter = SvgExporter::new(&self.config)?;
        let document = exporter.render_document(diagram)?;
        exporter.write_document(&document, output_path)?;

        Ok(())
    }
}
