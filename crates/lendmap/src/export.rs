//! Export backends for rendered diagrams.
//!
//! SVG is the only backend; it builds the document in memory and optionally
//! writes it to disk.

use thiserror::Error;

mod svg;

pub use self::svg::SvgExporter;

/// Errors raised while writing a rendered document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
