//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section has defaults, so an empty file (or no file at all) describes the
//! standard six-combination EBITDA run over `data/inputs.csv`.
//!
//! # Example
//!
//! ```no_run
//! use forecaster::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("forecast.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::application::projection::ModelConfig;
use crate::application::scenario::ScenarioConfig;
use crate::domain::ScenarioId;
use crate::error::{ConfigError, Result};

/// Largest number of decimals the report renderer will print.
const MAX_PRECISION: u32 = 10;

/// Where the parameter table is read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputConfig {
    /// Path to the source CSV.
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/inputs.csv")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// Optional files written after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputPaths {
    /// Comparison table CSV. Not written when unset.
    #[serde(default)]
    pub comparison: Option<PathBuf>,
}

/// Presentation settings for terminal reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Currency shown in report titles.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Decimal places printed in tables.
    #[serde(default)]
    pub precision: u32,
}

fn default_currency() -> String {
    "EUR".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            precision: 0,
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Source table location.
    #[serde(default)]
    pub input: InputConfig,

    /// Files written after a run.
    #[serde(default)]
    pub output: OutputPaths,

    /// Scenario identifiers to combine.
    #[serde(default)]
    pub scenarios: ScenarioConfig,

    /// Projection model and the parameters it reads.
    #[serde(default)]
    pub model: ModelConfig,

    /// Terminal report settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Read, parse and validate a configuration file.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Config::load`], but fall back to defaults when the file does
    /// not exist.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        debug!(path = %path.display(), "Config file not found; using defaults");
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants the type system cannot express.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "input.path" }.into());
        }

        if self.scenarios.common.is_empty() {
            return Err(ConfigError::MissingField {
                field: "scenarios.common",
            }
            .into());
        }
        validate_ids("scenarios.base_revenue", &self.scenarios.base_revenue)?;
        validate_ids("scenarios.trader_cogs", &self.scenarios.trader_cogs)?;

        for (name, reference) in self.model.inputs() {
            if reference.category.trim().is_empty() || reference.parameter.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "model",
                    reason: format!("{name} needs both a category and a parameter"),
                }
                .into());
            }
        }

        if self.report.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidValue {
                field: "report.precision",
                reason: format!("must be at most {MAX_PRECISION}"),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.format,
                    LOG_FORMATS.join(", ")
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_ids(field: &'static str, ids: &[ScenarioId]) -> Result<()> {
    if ids.is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if id.is_empty() {
            return Err(ConfigError::InvalidValue {
                field,
                reason: "scenario ids cannot be blank".into(),
            }
            .into());
        }
        if !seen.insert(id) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("'{id}' is listed more than once"),
            }
            .into());
        }
    }
    Ok(())
}
