//! Meshwork CLI library
//!
//! This module contains the core CLI logic for the Meshwork layout tool:
//! it reads a graph file, lays it out with the engine and writes node
//! positions and edge routes back out as TOML.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod input;
mod output;

pub use args::Args;
pub use error::CliError;

use std::{fs, path::Path};

use log::info;

use meshwork::NetworkLayout;

use input::GraphFile;

/// Run the Meshwork CLI application
///
/// This function lays out the graph described by the input file and writes
/// the resulting layout to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Graph file parsing errors
/// - Invalid graphs
/// - Output serialisation errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let input_path = Path::new(&args.input);
    if !input_path.exists() {
        return Err(CliError::MissingFile(input_path.to_path_buf()));
    }
    let source = fs::read_to_string(input_path)?;

    // Build the graph and lay it out
    let file = GraphFile::parse(input_path, &source)?;
    let graph = file.to_graph()?;
    let builder = NetworkLayout::new(app_config);
    let drawing = builder.run_with(&graph, |simulation| file.prepare(simulation))?;

    // Write output file
    fs::write(&args.output, output::render(&drawing)?)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
