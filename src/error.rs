use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Structural problems with the source parameter table.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input table {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input table must contain a '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("no year columns found (expected headers such as '2026', '2027', ...)")]
    NoYearColumns,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Scenario selection failures.
#[derive(Error, Debug, Clone)]
pub enum ScenarioError {
    #[error("scenario '{scenario}' not found in input table; the common layer is required")]
    MissingCommonLayer { scenario: String },

    #[error("model '{model}' did not produce its result series '{series}'")]
    MissingResultSeries { model: &'static str, series: &'static str },

    #[error("scenario '{scenario}' has no series named '{series}'")]
    UnknownSeries { scenario: String, series: String },

    #[error("{failed} of {total} scenario combinations failed")]
    IncompleteRun { failed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Input(InputError::Csv(err))
    }
}
