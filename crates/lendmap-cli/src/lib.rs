//! CLI logic for the lendmap diagram generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use lendmap::{DiagramRenderer, LendmapError, usecase};

/// Run the lendmap CLI application
///
/// This function renders the built-in use-case diagram and writes the
/// resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LendmapError` for:
/// - Configuration loading errors
/// - Diagram validation errors
/// - File I/O errors while writing the output
pub fn run(args: &Args) -> Result<(), LendmapError> {
    info!(output_path = args.output; "Rendering use-case diagram");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Render the built-in diagram using the DiagramRenderer API
    let diagram = usecase::lendlink_diagram();
    let renderer = DiagramRenderer::new(app_config);
    renderer.write_svg(&diagram, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
