//! Error adapter for converting LendmapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error as _, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use lendmap::LendmapError;

/// Adapter wrapping a [`LendmapError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a LendmapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LendmapError::Io(_) => "lendmap::io",
            LendmapError::Diagram(_) => "lendmap::diagram",
            LendmapError::Style(_) => "lendmap::style",
            LendmapError::Export(_) => "lendmap::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            LendmapError::Diagram(_) => Some(Box::new(
                "every edge endpoint must name a declared node label",
            )),
            LendmapError::Style(_) => Some(Box::new(
                "colors accept CSS strings such as \"gray\" or \"#ff8000\"",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use lendmap::{Diagram, DiagramRenderer, geometry::Point};

    use super::*;

    fn unknown_label_error() -> LendmapError {
        let mut diagram = Diagram::new("broken");
        diagram
            .insert_node("A", Point::new(0.0, 0.0))
            .expect("Failed to insert node");
        diagram.push_edge("A", "Missing");

        DiagramRenderer::default()
            .render_svg(&diagram)
            .expect_err("render must fail")
    }

    #[test]
    fn test_diagram_error_code_and_help() {
        let err = unknown_label_error();
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "lendmap::diagram");
        assert!(adapter.help().is_some());
        assert!(adapter.to_string().contains("Missing"));
    }

    #[test]
    fn test_io_error_code() {
        let err = LendmapError::Io(std::io::Error::other("boom"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "lendmap::io");
        assert!(adapter.help().is_none());
    }
}
