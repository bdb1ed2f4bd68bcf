//! Scenario-agnostic domain types.
//!
//! - [`table::InputTable`] - immutable normalized parameter rows plus the
//!   detected [`timeline::Timeline`]
//! - [`combined::CombinedParameterSet`] - one effective row per
//!   (category, parameter) for a scenario combination
//! - [`series::ResolvedSeries`] - gap-free per-year values
//! - [`report::ProjectionReport`] - the named series a model produces

pub mod combined;
pub mod error;
pub mod id;
pub mod parameter;
pub mod report;
pub mod series;
pub mod table;
pub mod timeline;

pub use combined::CombinedParameterSet;
pub use error::DomainError;
pub use id::{ParameterKey, ScenarioId};
pub use parameter::{ParameterRow, ParameterValues};
pub use report::ProjectionReport;
pub use series::ResolvedSeries;
pub use table::{InputTable, Layer};
pub use timeline::Timeline;
