//! Inbound (driving) ports consumed by the scenario driver.
//!
//! # Modules
//!
//! - [`projection`]: Projection model interface

pub mod projection;
