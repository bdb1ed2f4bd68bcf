//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`inbound::projection::ProjectionModel`] - pluggable arithmetic that
//!   turns a combined parameter set into a per-year report
//!
//! Table loading and report rendering are plain adapters; they have a
//! single implementation and no port.

pub mod inbound;
