//! Scenario resolution engine.
//!
//! - [`overlay`] - three-level layer merge per combination
//! - [`resolver`] - parameter lookup with broadcast and zero defaults
//! - [`projection`] - pluggable models over resolved series
//! - [`scenario`] - combination enumeration and the run driver
//! - [`comparison`] - result series side by side

pub mod comparison;
pub mod overlay;
pub mod projection;
pub mod resolver;
pub mod scenario;
