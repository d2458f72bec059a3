//! Error types for Vedic calculations.

use panchanga_core::ProviderError;
use panchanga_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the position provider or sunrise solver.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
