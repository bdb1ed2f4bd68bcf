//! Per-combination projection output.

use serde::Serialize;

use super::series::ResolvedSeries;

/// Named per-year series produced by a projection model.
///
/// One of the series is designated the result (e.g. `EBITDA`) and feeds the
/// cross-scenario comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionReport {
    series: Vec<ResolvedSeries>,
    result: usize,
}

impl ProjectionReport {
    /// Build a report from its columns, naming the result column.
    ///
    /// Returns `None` if no column carries the result name.
    #[must_use]
    pub fn new(series: Vec<ResolvedSeries>, result: &str) -> Option<Self> {
        let result = series.iter().position(|s| s.name() == result)?;
        Some(Self { series, result })
    }

    /// All columns in display order.
    #[must_use]
    pub fn series(&self) -> &[ResolvedSeries] {
        &self.series
    }

    /// Designated result column.
    #[must_use]
    pub fn result(&self) -> &ResolvedSeries {
        &self.series[self.result]
    }

    /// Column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ResolvedSeries> {
        self.series.iter().find(|s| s.name() == name)
    }
}
