//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar validation or time-representation conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid calendar date: {0}")]
    InvalidDate(&'static str),
    /// The instant cannot be represented in the target type.
    #[error("instant out of range: {0}")]
    OutOfRange(&'static str),
    /// A non-finite (NaN or infinite) time value was supplied.
    #[error("non-finite time value")]
    NonFinite,
}
