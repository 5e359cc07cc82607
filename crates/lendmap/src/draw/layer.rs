//! Layer-based rendering for SVG output.
//!
//! Drawables specify which z-order layer their SVG nodes belong to; the
//! collected output is emitted bottom-to-top as one `<g>` group per layer.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, declared bottom-to-top.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill, when configured.
    Background,
    /// Node boxes.
    Content,
    /// Arrows between nodes.
    Arrow,
    /// Node labels.
    Text,
    /// The diagram title, always on top.
    Title,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Text => "text",
            Self::Title => "title",
        }
    }
}

/// SVG nodes collected by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes collected into the given layer.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Within a layer, nodes keep the order
    /// they were added in; the sort across layers is stable.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_starts_empty() {
        assert!(LayeredOutput::new().is_empty());
    }

    #[test]
    fn test_layer_len_counts_per_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        assert_eq!(output.layer_len(RenderLayer::Content), 2);
        assert_eq!(output.layer_len(RenderLayer::Arrow), 1);
        assert_eq!(output.layer_len(RenderLayer::Title), 0);
    }

    #[test]
    fn test_render_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let nodes = output.render();
        // Two non-empty layers -> two groups, content before text.
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].to_string().contains("data-layer=\"content\""));
        assert!(nodes[1].to_string().contains("data-layer=\"text\""));
    }

    #[test]
    fn test_render_empty_output() {
        assert!(LayeredOutput::new().render().is_empty());
    }
}
