//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when a table or
//! timeline would violate its invariants.
//!
//! # Examples
//!
//! ```
//! use forecaster::domain::error::DomainError;
//! use forecaster::domain::timeline::Timeline;
//!
//! let result = Timeline::try_new(Vec::<String>::new());
//! assert!(matches!(result, Err(DomainError::EmptyTimeline)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A timeline needs at least one year label.
    #[error("timeline must contain at least one year")]
    EmptyTimeline,

    /// Year labels must be unique within a timeline.
    #[error("year '{year}' appears more than once in the timeline")]
    DuplicateYear {
        /// The repeated label.
        year: String,
    },

    /// A row carries a value for a year the table does not know about.
    #[error("row {key} in scenario '{scenario}' has a value for unknown year '{year}'")]
    UnknownYear {
        /// Scenario of the offending row.
        scenario: String,
        /// `category/parameter` of the offending row.
        key: String,
        /// The year label not present in the timeline.
        year: String,
    },

    /// Two series over different timelines cannot be combined.
    #[error("series '{left}' and '{right}' cover different years")]
    TimelineMismatch {
        /// Name of the left-hand series.
        left: String,
        /// Name of the right-hand series.
        right: String,
    },

    /// A value left the representable decimal range.
    #[error("arithmetic overflow in series '{series}'")]
    Overflow {
        /// Name of the series being computed.
        series: String,
    },
}
