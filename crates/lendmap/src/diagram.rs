//! The static diagram model: labeled nodes at fixed coordinates and the
//! ordered edge sequence between them.
//!
//! A [`Diagram`] is built once and never mutated afterwards. Node identity is
//! the label text itself (labels may contain `\n` line breaks, which the
//! renderer turns into stacked text lines), so the node store is keyed by
//! label. Insertion order is preserved; edges render in the order they were
//! pushed.

use indexmap::IndexMap;
use thiserror::Error;

use crate::geometry::Point;

/// Errors in the diagram dataset itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    /// A node was inserted under a label that already exists.
    #[error("duplicate node label `{label}`")]
    DuplicateNode { label: String },

    /// An edge endpoint names a label with no corresponding node.
    #[error("edge {edge_index} references unknown node label `{label}`")]
    UnknownLabel { edge_index: usize, label: String },
}

/// A directed connection between two nodes, identified by their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the label of the node this edge starts at.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the label of the node this edge points to.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// A titled flowchart: nodes at fixed coordinates plus an ordered edge list.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    title: String,
    nodes: IndexMap<String, Point>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inserts a node centered at the given diagram-space coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] if a node with the same label
    /// already exists; label text is the node's identity.
    pub fn insert_node(
        &mut self,
        label: impl Into<String>,
        position: Point,
    ) -> Result<(), DiagramError> {
        let label = label.into();
        if self.nodes.contains_key(&label) {
            return Err(DiagramError::DuplicateNode { label });
        }
        self.nodes.insert(label, position);
        Ok(())
    }

    /// Appends an edge to the rendering sequence.
    ///
    /// Endpoints are not resolved here; [`Diagram::validate`] (or the
    /// renderer) reports edges that reference labels with no node.
    pub fn push_edge(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.edges.push(Edge::new(source, target));
    }

    /// Returns the node coordinate for a label, if the node exists.
    pub fn node_position(&self, label: &str) -> Option<Point> {
        self.nodes.get(label).copied()
    }

    /// Iterates nodes in insertion order as (label, position) pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Point)> {
        self.nodes.iter().map(|(label, pos)| (label.as_str(), *pos))
    }

    /// Returns the number of nodes in the diagram.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the edges in rendering order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Checks the label-existence invariant without rendering anything.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownLabel`] for the first edge endpoint
    /// that does not resolve to a node.
    pub fn validate(&self) -> Result<(), DiagramError> {
        for (edge_index, edge) in self.edges.iter().enumerate() {
            for label in [edge.source(), edge.target()] {
                if !self.nodes.contains_key(label) {
                    return Err(DiagramError::UnknownLabel {
                        edge_index,
                        label: label.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
