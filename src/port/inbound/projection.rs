//! Projection model port.
//!
//! A projection model is the computation run once per scenario combination.
//! It receives the combined parameter set, resolves the series it needs and
//! returns a [`ProjectionReport`] whose result column feeds the comparison.
//!
//! # Example
//!
//! ```
//! use forecaster::application::resolver::resolve;
//! use forecaster::domain::{CombinedParameterSet, ProjectionReport, Timeline};
//! use forecaster::error::Result;
//! use forecaster::port::inbound::projection::ProjectionModel;
//!
//! struct Revenue;
//!
//! impl ProjectionModel for Revenue {
//!     fn name(&self) -> &'static str { "revenue" }
//!
//!     fn result_series(&self) -> &'static str { "Revenue" }
//!
//!     fn project(&self, inputs: &CombinedParameterSet, timeline: &Timeline) -> Result<ProjectionReport> {
//!         let revenue = resolve(inputs, "net_revenue", "revenue", timeline).renamed("Revenue");
//!         Ok(ProjectionReport::new(vec![revenue], "Revenue").expect("result column present"))
//!     }
//! }
//! ```

use crate::domain::{CombinedParameterSet, ProjectionReport, Timeline};
use crate::error::Result;

/// Computation over resolved series for one scenario combination.
pub trait ProjectionModel: Send + Sync {
    /// Unique identifier for this model.
    ///
    /// Used in configuration and logging.
    fn name(&self) -> &'static str;

    /// Name of the column compared across scenarios.
    fn result_series(&self) -> &'static str;

    /// Compute the per-year report for one combined parameter set.
    ///
    /// Missing parameters are not errors here; the resolver already
    /// substitutes zeros for them.
    fn project(&self, inputs: &CombinedParameterSet, timeline: &Timeline)
        -> Result<ProjectionReport>;
}
