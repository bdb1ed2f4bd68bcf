//! Outbound adapters.
//!
//! - [`csv`] - reading the parameter table and writing tables back out

pub mod csv;
