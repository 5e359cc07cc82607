//! Error types for lendmap operations.

use std::io;

use thiserror::Error;

use crate::diagram::DiagramError;

/// The main error type for lendmap operations.
#[derive(Debug, Error)]
pub enum LendmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for LendmapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
