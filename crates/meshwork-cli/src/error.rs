//! Error types for the Meshwork CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use meshwork::MeshworkError;

/// Errors raised while running the CLI.
///
/// Parse failures keep the file content so the error can be reported with
/// the offending span highlighted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Meshwork(#[from] MeshworkError),

    #[error("Failed to parse configuration file `{}`", path.display())]
    ConfigParse {
        path: PathBuf,
        src: String,
        #[source]
        err: toml::de::Error,
    },

    #[error("Failed to parse graph file `{}`", path.display())]
    InputParse {
        path: PathBuf,
        src: String,
        #[source]
        err: toml::de::Error,
    },

    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to write output: {0}")]
    Output(String),
}
