//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error type and miette's
//! rich diagnostic formatting. TOML parse failures, including rejected
//! configuration values, are rendered with the offending span of the file
//! highlighted.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use meshwork::MeshworkError;

use crate::error::CliError;

/// Adapter rendering a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl ErrorAdapter<'_> {
    /// The TOML error and file content of a parse failure, if this is one.
    fn parse_failure(&self) -> Option<(&toml::de::Error, &String)> {
        match self.0 {
            CliError::ConfigParse { err, src, .. } | CliError::InputParse { err, src, .. } => {
                Some((err, src))
            }
            _ => None,
        }
    }
}

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
        // Parse failures carry their message on the source label instead
        if self.parse_failure().is_some() {
            return None;
        }
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "meshwork::io",
            CliError::Meshwork(MeshworkError::Config(_)) => "meshwork::config",
            CliError::Meshwork(MeshworkError::Graph(_)) => "meshwork::graph",
            CliError::Meshwork(MeshworkError::Routing(_)) => "meshwork::routing",
            CliError::ConfigParse { .. } => "meshwork::config_parse",
            CliError::InputParse { .. } => "meshwork::input_parse",
            CliError::MissingFile(_) => "meshwork::missing_file",
            CliError::Output(_) => "meshwork::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::ConfigParse { .. } => {
                "configuration files may contain a `scale`, a [force] and a [routing] section"
            }
            CliError::InputParse { .. } => {
                "graph files contain [[nodes]] tables with an `id` and [[edges]] tables with `id`, `from` and `to`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        let (_, src) = self.parse_failure()?;
        Some(src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (err, _) = self.parse_failure()?;
        let span = SourceSpan::from(err.span()?);
        let label = LabeledSpan::new_primary_with_span(Some(err.message().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Convert a [`CliError`] into a reportable miette diagnostic.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
