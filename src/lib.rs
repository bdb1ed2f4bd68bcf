//! Forecaster - scenario-layered multi-year EBITDA projections.
//!
//! A flat parameter table holds rows for several scenarios. For every
//! (base revenue, trader COGS) combination the rows of three layers are
//! overlaid (`common` < `base_revenue` < `trader_cogs`), each requested
//! parameter is resolved into a per-year series, and a projection model
//! turns those series into a report. The reports are then compared side by
//! side.
//!
//! # Modules
//!
//! - [`domain`] - table, timeline, parameter and series types
//! - [`port`] - the [`ProjectionModel`](port::inbound::projection::ProjectionModel) seam
//! - [`application`] - overlay merge, resolver, models, enumeration, comparison
//! - [`adapter`] - CSV I/O and the `forecaster` CLI
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use forecaster::adapter::outbound::csv::load_table;
//! use forecaster::application::projection::EbitdaModel;
//! use forecaster::application::scenario::{run_all, ScenarioConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_table(Path::new("data/inputs.csv"))?;
//!     let run = run_all(&table, &ScenarioConfig::default(), &EbitdaModel::default())?;
//!     for (label, outcome) in &run.results {
//!         println!("{label}: {}", outcome.report.result().checked_total()?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
