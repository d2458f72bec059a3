//! Error types for position providers and sunrise solvers.

use panchanga_time::TimeError;
use thiserror::Error;

use crate::Body;

/// Errors reported by a [`PositionProvider`](crate::PositionProvider) or
/// [`SunriseSolver`](crate::SunriseSolver).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider has no model for this body.
    #[error("body {0:?} is not supported by this provider")]
    UnsupportedBody(Body),
    /// The instant lies outside the provider's validity span.
    #[error("JD {jd} is outside the provider's validity span")]
    OutOfRange { jd: f64 },
    /// The location cannot be used by the solver.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The provider (or the resource behind it) could not answer.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// Time conversion failure.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
