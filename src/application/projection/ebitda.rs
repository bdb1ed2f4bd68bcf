//! EBITDA projection.
//!
//! ```text
//! trader COGS cost = base gross margin * trader COGS percent
//! EBITDA           = base gross margin - trader COGS cost
//! ```
//!
//! No operating costs beyond trader COGS are modelled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::resolver::resolve;
use crate::domain::{CombinedParameterSet, ProjectionReport, Timeline};
use crate::error::{Result, ScenarioError};
use crate::port::inbound::projection::ProjectionModel;

pub const BASE_GROSS_MARGIN: &str = "Base Gross Margin";
pub const TRADER_COGS_COST: &str = "Trader COGS Cost";
pub const EBITDA: &str = "EBITDA";

/// Reference to a (category, parameter) row in the combined set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterRef {
    pub category: String,
    pub parameter: String,
}

impl ParameterRef {
    pub fn new(category: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            parameter: parameter.into(),
        }
    }
}

/// Which input rows feed the EBITDA model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EbitdaConfig {
    /// Gross margin series, usually supplied by the base-revenue layer.
    #[serde(default = "default_margin")]
    pub margin: ParameterRef,

    /// Trader COGS share of margin, usually supplied by the trader layer.
    #[serde(default = "default_cogs_percent")]
    pub cogs_percent: ParameterRef,
}

fn default_margin() -> ParameterRef {
    ParameterRef::new("net_revenue", "Total gross margin (base)")
}

fn default_cogs_percent() -> ParameterRef {
    ParameterRef::new("trader_cogs", "trader_cogs_percent")
}

impl Default for EbitdaConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            cogs_percent: default_cogs_percent(),
        }
    }
}

/// Margin-minus-trader-COGS model.
#[derive(Debug, Clone, Default)]
pub struct EbitdaModel {
    config: EbitdaConfig,
}

impl EbitdaModel {
    #[must_use]
    pub fn new(config: EbitdaConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EbitdaConfig {
        &self.config
    }
}

impl ProjectionModel for EbitdaModel {
    fn name(&self) -> &'static str {
        "ebitda"
    }

    fn result_series(&self) -> &'static str {
        EBITDA
    }

    fn project(
        &self,
        inputs: &CombinedParameterSet,
        timeline: &Timeline,
    ) -> Result<ProjectionReport> {
        let margin_ref = &self.config.margin;
        let cogs_ref = &self.config.cogs_percent;

        let margin = resolve(inputs, &margin_ref.category, &margin_ref.parameter, timeline)
            .renamed(BASE_GROSS_MARGIN);
        let cogs_percent = resolve(inputs, &cogs_ref.category, &cogs_ref.parameter, timeline);

        let cogs_cost =
            margin.try_zip_with(&cogs_percent, TRADER_COGS_COST, Decimal::checked_mul)?;
        let ebitda = margin.try_zip_with(&cogs_cost, EBITDA, Decimal::checked_sub)?;

        debug!(total = %ebitda.checked_total()?, "Projected EBITDA");

        ProjectionReport::new(vec![margin, cogs_cost, ebitda], EBITDA).ok_or_else(|| {
            ScenarioError::MissingResultSeries {
                model: self.name(),
                series: EBITDA,
            }
            .into()
        })
    }
}
