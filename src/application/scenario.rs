//! Scenario enumeration and the per-combination driver.
//!
//! Every base-revenue id is paired with every trader-COGS id (base-revenue
//! major). Each pair gets its own combined parameter set, which is projected
//! and then dropped; the input table is only ever borrowed.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span};

use crate::application::overlay::merge;
use crate::domain::{InputTable, ProjectionReport, ScenarioId};
use crate::error::{Result, ScenarioError};
use crate::port::inbound::projection::ProjectionModel;

/// Scenario identifiers to combine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Layer applied underneath every combination.
    #[serde(default = "default_common")]
    pub common: ScenarioId,

    /// Base-revenue scenarios (outer loop).
    #[serde(default = "default_base_revenue")]
    pub base_revenue: Vec<ScenarioId>,

    /// Trader-COGS scenarios (inner loop).
    #[serde(default = "default_trader_cogs")]
    pub trader_cogs: Vec<ScenarioId>,
}

fn default_common() -> ScenarioId {
    ScenarioId::from("common")
}

fn default_base_revenue() -> Vec<ScenarioId> {
    vec!["base".into(), "low".into()]
}

fn default_trader_cogs() -> Vec<ScenarioId> {
    vec!["vitol".into(), "gen-i".into(), "met".into()]
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            common: default_common(),
            base_revenue: default_base_revenue(),
            trader_cogs: default_trader_cogs(),
        }
    }
}

/// One (base revenue, trader COGS) combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScenarioPair {
    pub base_revenue: ScenarioId,
    pub trader_cogs: ScenarioId,
}

impl ScenarioPair {
    pub fn new(base_revenue: impl Into<ScenarioId>, trader_cogs: impl Into<ScenarioId>) -> Self {
        Self {
            base_revenue: base_revenue.into(),
            trader_cogs: trader_cogs.into(),
        }
    }

    /// Display label, `"{base_revenue} + {trader_cogs}"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScenarioPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.base_revenue, self.trader_cogs)
    }
}

/// Cartesian product, base-revenue major.
#[must_use]
pub fn enumerate(base_revenue: &[ScenarioId], trader_cogs: &[ScenarioId]) -> Vec<ScenarioPair> {
    base_revenue
        .iter()
        .flat_map(|base| {
            trader_cogs
                .iter()
                .map(move |cogs| ScenarioPair::new(base.clone(), cogs.clone()))
        })
        .collect()
}

/// Successful projection for one combination.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub pair: ScenarioPair,
    pub report: ProjectionReport,
}

/// A combination that could not be projected.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioFailure {
    pub pair: ScenarioPair,
    pub reason: String,
}

/// Results of a full enumeration, keyed by pair label in enumeration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioRun {
    pub results: IndexMap<String, ScenarioOutcome>,
    pub failures: Vec<ScenarioFailure>,
}

impl ScenarioRun {
    /// True when every combination produced a report.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Report for a label.
    #[must_use]
    pub fn report(&self, label: &str) -> Option<&ProjectionReport> {
        self.results.get(label).map(|o| &o.report)
    }
}

/// Merge and project every combination.
///
/// A missing common layer fails the whole run before any combination is
/// attempted. Any other failure is recorded against its combination and the
/// enumeration carries on.
pub fn run_all(
    table: &InputTable,
    scenarios: &ScenarioConfig,
    model: &dyn ProjectionModel,
) -> Result<ScenarioRun> {
    if !table.has_scenario(&scenarios.common) {
        return Err(ScenarioError::MissingCommonLayer {
            scenario: scenarios.common.to_string(),
        }
        .into());
    }

    let pairs = enumerate(&scenarios.base_revenue, &scenarios.trader_cogs);
    info!(
        combinations = pairs.len(),
        model = model.name(),
        "Running scenario combinations"
    );

    let mut run = ScenarioRun::default();
    for pair in pairs {
        let label = pair.label();
        let _span = info_span!("scenario", %label).entered();

        let projected = merge(
            table,
            &scenarios.common,
            &pair.base_revenue,
            &pair.trader_cogs,
        )
        .and_then(|inputs| model.project(&inputs, table.timeline()))
        .and_then(|report| {
            let total = report.result().checked_total()?;
            Ok((report, total))
        });

        match projected {
            Ok((report, total)) => {
                info!(%total, "Scenario projected");
                run.results.insert(label, ScenarioOutcome { pair, report });
            }
            Err(e) => {
                error!(error = %e, "Scenario failed");
                run.failures.push(ScenarioFailure {
                    pair,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(run)
}
