//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for parameter rows and input tables.
//! - [`files`] - Canonical CSV and TOML fixtures written to scratch paths.

pub mod domain;
pub mod files;
