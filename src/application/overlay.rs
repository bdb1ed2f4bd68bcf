//! Three-level scenario overlay.
//!
//! Layers are applied lowest priority first:
//! `common` < `base_revenue` < `trader_cogs`.

use tracing::{debug, warn};

use crate::domain::{CombinedParameterSet, InputTable, Layer, ScenarioId};
use crate::error::{Result, ScenarioError};

/// Build the effective parameter set for one scenario combination.
///
/// The common layer is required. A missing base-revenue or trader-COGS
/// layer is logged and contributes nothing.
pub fn merge(
    table: &InputTable,
    common: &ScenarioId,
    base_revenue: &ScenarioId,
    trader_cogs: &ScenarioId,
) -> Result<CombinedParameterSet> {
    let common_layer = table
        .layer(common)
        .ok_or_else(|| ScenarioError::MissingCommonLayer {
            scenario: common.to_string(),
        })?;

    let base_layer = optional_layer(table, base_revenue, "base revenue");
    let cogs_layer = optional_layer(table, trader_cogs, "trader COGS");

    let rows = std::iter::once(common_layer)
        .chain(base_layer)
        .chain(cogs_layer)
        .flat_map(|layer| layer.rows());
    let combined = CombinedParameterSet::from_rows(rows);

    debug!(
        common = %common,
        base_revenue = %base_revenue,
        trader_cogs = %trader_cogs,
        parameters = combined.len(),
        "Merged scenario layers"
    );

    Ok(combined)
}

fn optional_layer<'a>(
    table: &'a InputTable,
    scenario: &ScenarioId,
    role: &'static str,
) -> Option<Layer<'a>> {
    let layer = table.layer(scenario);
    if layer.is_none() {
        warn!(scenario = %scenario, role, "Scenario not found; using an empty layer");
    }
    layer
}
