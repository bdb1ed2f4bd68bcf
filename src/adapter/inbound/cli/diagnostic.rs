//! Miette-based error diagnostics for CLI error presentation.
//!
//! Fatal errors are converted into one of the diagnostics below before being
//! rendered, so that each class of failure carries a code and a hint.

use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as ConfigFailure, Error, InputError, ScenarioError};

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(forecaster::config))]
pub struct ConfigError {
    pub message: String,

    #[source_code]
    pub src: Option<NamedSource<String>>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a configuration error without source context.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            src: None,
            span: None,
            help: None,
        }
    }

    /// Attach the file content the error refers to.
    #[must_use]
    pub fn with_source(mut self, name: &str, src: impl Into<String>) -> Self {
        self.src = Some(NamedSource::new(name, src.into()));
        self
    }

    /// Point the label at a byte range of the source.
    #[must_use]
    pub fn with_span(mut self, offset: usize, len: usize) -> Self {
        self.span = Some((offset, len).into());
        self
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Problem with the input parameter table.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(forecaster::input))]
pub struct TableError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Scenario selection or projection failure.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(forecaster::scenario))]
pub struct ScenarioDiagnostic {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Convert a crate error into a renderable report.
///
/// `config_path` is re-read for TOML syntax errors so that the offending
/// span can be shown.
#[must_use]
pub fn report(err: Error, config_path: Option<&Path>) -> Report {
    match err {
        Error::Config(ConfigFailure::Parse(parse)) => {
            let mut diagnostic =
                ConfigError::new(format!("failed to parse config: {}", parse.message()))
                    .with_help("check the TOML syntax near the marked location");
            if let Some(path) = config_path {
                if let Ok(src) = fs::read_to_string(path) {
                    diagnostic = diagnostic.with_source(&path.display().to_string(), src);
                    if let Some(span) = parse.span() {
                        diagnostic = diagnostic.with_span(span.start, span.len());
                    }
                }
            }
            Report::new(diagnostic)
        }
        Error::Config(ConfigFailure::ReadFile(source)) => Report::new(
            ConfigError::new(format!("failed to read config file: {source}"))
                .with_help("run `forecaster config init` to create one"),
        ),
        Error::Config(config) => Report::new(
            ConfigError::new(config.to_string())
                .with_help("run `forecaster config validate` after editing"),
        ),
        Error::Input(input) => {
            let help = match &input {
                InputError::MissingColumn { .. } => Some(
                    "the header row needs scenario, category and parameter columns".to_string(),
                ),
                InputError::NoYearColumns => {
                    Some("year columns are recognised by headers starting with \"20\"".to_string())
                }
                InputError::ReadFile { .. } => {
                    Some("set [input].path in the config or pass --input".to_string())
                }
                InputError::Csv(_) => None,
            };
            Report::new(TableError {
                message: input.to_string(),
                help,
            })
        }
        Error::Scenario(scenario) => {
            let help = match &scenario {
                ScenarioError::MissingCommonLayer { .. } => Some(
                    "add rows for the common scenario or change [scenarios].common".to_string(),
                ),
                ScenarioError::IncompleteRun { .. } => {
                    Some("the failing combinations are listed above; rerun with -v for details".to_string())
                }
                ScenarioError::MissingResultSeries { .. }
                | ScenarioError::UnknownSeries { .. } => None,
            };
            Report::new(ScenarioDiagnostic {
                message: scenario.to_string(),
                help,
            })
        }
        other => Report::msg(other.to_string()),
    }
}
