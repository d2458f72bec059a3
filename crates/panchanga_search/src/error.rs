//! Error types for transition search and panchanga assembly.

use panchanga_base::VedicError;
use panchanga_core::ProviderError;
use panchanga_time::TimeError;
use thiserror::Error;

/// Errors from search and panchanga computation.
///
/// A transition search that runs out of horizon is not an error; it yields
/// an absent instant.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Invalid search or panchanga configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Invalid geographic location.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The ayanamsa selector matched no registered system.
    #[error("unknown ayanamsa system: {selector}")]
    UnknownAyanamsa { selector: String },
}
