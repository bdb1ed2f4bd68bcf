//! Parameter lookup with broadcast and zero-default policies.

use tracing::warn;

use crate::domain::{CombinedParameterSet, ResolvedSeries, Timeline};

/// Resolve a named parameter to one value per timeline year.
///
/// - absent parameter: warning, all-zero series
/// - constant present: constant broadcast to every year
/// - otherwise: the year cells, with missing cells read as zero
///
/// The returned series is named after `parameter`.
pub fn resolve(
    inputs: &CombinedParameterSet,
    category: &str,
    parameter: &str,
    timeline: &Timeline,
) -> ResolvedSeries {
    let Some(values) = inputs.get(category, parameter) else {
        warn!(category, parameter, "Parameter not found; using 0");
        return ResolvedSeries::zeros(parameter, timeline);
    };

    if let Some(constant) = values.constant {
        return ResolvedSeries::broadcast(parameter, constant, timeline);
    }

    ResolvedSeries::from_fn(parameter, timeline, |year| {
        values.year(year).unwrap_or_default()
    })
}
