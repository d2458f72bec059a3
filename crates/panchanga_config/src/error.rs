//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, parsing, or validating a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the expected layout.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// The configured ayanamsa matches no registered system.
    #[error("unknown ayanamsa system: {0}")]
    UnknownAyanamsa(String),
}
