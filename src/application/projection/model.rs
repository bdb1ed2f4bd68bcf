//! Model selection from the `[model]` config section.

use serde::{Deserialize, Serialize};

use super::ebitda::{EbitdaConfig, EbitdaModel, ParameterRef};
use crate::port::inbound::projection::ProjectionModel;

/// Model selection, tagged by `type` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelConfig {
    /// Margin minus trader COGS.
    Ebitda(EbitdaConfig),
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::Ebitda(EbitdaConfig::default())
    }
}

impl ModelConfig {
    /// Parameter references the model reads, for validation and display.
    #[must_use]
    pub fn inputs(&self) -> Vec<(&'static str, &ParameterRef)> {
        match self {
            Self::Ebitda(config) => vec![
                ("margin", &config.margin),
                ("cogs_percent", &config.cogs_percent),
            ],
        }
    }
}

/// Instantiate the configured model.
#[must_use]
pub fn build_model(config: &ModelConfig) -> Box<dyn ProjectionModel> {
    match config {
        ModelConfig::Ebitda(config) => Box::new(EbitdaModel::new(config.clone())),
    }
}
