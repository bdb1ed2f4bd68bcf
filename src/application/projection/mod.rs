//! Projection models and their configuration.
//!
//! Each model implements
//! [`ProjectionModel`](crate::port::inbound::projection::ProjectionModel);
//! [`build_model`] picks the implementation named by the `[model]` config
//! section.

pub mod ebitda;
pub mod model;

pub use ebitda::{EbitdaConfig, EbitdaModel, ParameterRef};
pub use model::{build_model, ModelConfig};
