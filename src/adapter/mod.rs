//! Inbound (CLI) and outbound (CSV) adapters around the application core.

pub mod inbound;
pub mod outbound;
