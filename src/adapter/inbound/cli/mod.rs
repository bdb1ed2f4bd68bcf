//! CLI module graph.

pub mod command;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod dispatch;
pub mod inputs;
pub mod output;
pub mod report;
pub mod resolve;
pub mod run;

pub use dispatch::dispatch;
