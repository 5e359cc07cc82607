//! SVG rendering of a [`Diagram`].

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use crate::{
    color::Color,
    config::AppConfig,
    diagram::{Diagram, DiagramError},
    draw::{
        ArrowDefinition, BoxDefinition, LayeredOutput, RenderLayer, TextDefinition,
        find_rectangle_intersection, marker_definitions,
    },
    error::LendmapError,
    geometry::Size,
    layout::Projection,
};

/// Node box size in diagram units. Every box has the same fixed footprint;
/// labels do not influence sizing.
const NODE_BOX_WIDTH: f32 = 2.0;
const NODE_BOX_HEIGHT: f32 = 1.0;

/// Renders diagrams to SVG documents.
///
/// The exporter is configured once from an [`AppConfig`] and can render any
/// number of diagrams. Output is layered: background, boxes, arrows, labels,
/// title, bottom to top.
pub struct SvgExporter {
    projection: Projection,
    box_definition: BoxDefinition,
    arrow_definition: ArrowDefinition,
    label_text: TextDefinition,
    title_text: TextDefinition,
    background: Option<Color>,
}

impl SvgExporter {
    /// Creates an exporter from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LendmapError::Style`] if a configured color string cannot
    /// be parsed.
    pub fn new(config: &AppConfig) -> Result<Self, LendmapError> {
        let style = config.style();

        let mut box_definition = BoxDefinition::default();
        if let Some(fill) = style.node_fill_color().map_err(LendmapError::Style)? {
            box_definition.set_fill_color(fill);
        }

        let mut arrow_definition = ArrowDefinition::default();
        if let Some(color) = style.arrow_color().map_err(LendmapError::Style)? {
            arrow_definition.set_color(color);
        }

        Ok(Self {
            projection: Projection::new(config.canvas()),
            box_definition,
            arrow_definition,
            label_text: TextDefinition::label(),
            title_text: TextDefinition::title(),
            background: style.background_color().map_err(LendmapError::Style)?,
        })
    }

    fn node_box_size(&self) -> Size {
        self.projection
            .project_size(Size::new(NODE_BOX_WIDTH, NODE_BOX_HEIGHT))
    }

    /// Renders the diagram into layered SVG nodes.
    ///
    /// One rounded rectangle and one label per node, one arrow per edge in
    /// sequence order, plus the title.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownLabel`] if an edge endpoint does not
    /// resolve to a node; no edge is ever skipped silently.
    pub fn render_layers(&self, diagram: &Diagram) -> Result<LayeredOutput, DiagramError> {
        let mut output = LayeredOutput::new();
        let document_size = self.projection.document_size();
        let box_size = self.node_box_size();

        if let Some(background) = self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", document_size.width())
                .set("height", document_size.height())
                .set("fill", &background)
                .set("fill-opacity", background.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }

        for (label, position) in diagram.nodes() {
            let center = self.projection.project_point(position);
            output.add_to_layer(
                RenderLayer::Content,
                self.box_definition.render_to_svg(box_size, center),
            );
            output.add_to_layer(
                RenderLayer::Text,
                Box::new(self.label_text.render_to_svg(label, center)),
            );
        }

        for (edge_index, edge) in diagram.edges().iter().enumerate() {
            let lookup = |label: &str| {
                diagram
                    .node_position(label)
                    .ok_or_else(|| DiagramError::UnknownLabel {
                        edge_index,
                        label: label.to_string(),
                    })
            };
            let source = self.projection.project_point(lookup(edge.source())?);
            let target = self.projection.project_point(lookup(edge.target())?);

            // Clip the arrow to the box boundaries so the head is visible.
            let start = find_rectangle_intersection(source, target, box_size);
            let end = find_rectangle_intersection(target, source, box_size);

            output.add_to_layer(
                RenderLayer::Arrow,
                Box::new(self.arrow_definition.render_to_svg(start, end)),
            );
        }

        if !diagram.title().is_empty() {
            output.add_to_layer(
                RenderLayer::Title,
                Box::new(
                    self.title_text
                        .render_to_svg(diagram.title(), self.projection.title_anchor()),
                ),
            );
        }

        Ok(output)
    }

    /// Renders the diagram into a complete SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownLabel`] if an edge endpoint does not
    /// resolve to a node.
    pub fn render_document(&self, diagram: &Diagram) -> Result<Document, DiagramError> {
        let output = self.render_layers(diagram)?;
        let document_size = self.projection.document_size();
        let arrow_color = self.arrow_definition.color();

        let mut document = Document::new()
            .set("width", document_size.width())
            .set("height", document_size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", document_size.width(), document_size.height()),
            )
            .add(marker_definitions(std::iter::once(&arrow_color)));

        for node in output.render() {
            document = document.add(node);
        }

        debug!("SVG document rendered");
        Ok(document)
    }

    /// Writes an SVG document to the specified file.
    pub fn write_document(
        &self,
        document: &Document,
        file_name: impl AsRef<Path>,
    ) -> Result<(), super::Error> {
        let file_name = file_name.as_ref();
        info!(file_name = file_name.display().to_string(); "Creating SVG file");

        let f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name.display().to_string(), err:err; "Failed to create SVG file");
                return Err(super::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{document}") {
            error!(file_name = file_name.display().to_string(), err:err; "Failed to write SVG content");
            return Err(super::Error::Io(err));
        }

        Ok(())
    }
}
