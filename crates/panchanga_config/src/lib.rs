//! TOML configuration for the panchanga engine.
//!
//! A configuration file is optional and every key has a default. Loading
//! happens in two steps: [`ConfigFile`] mirrors the file layout, and
//! [`ConfigFile::resolve`] turns it into the validated runtime structs
//! held by [`EngineConfig`].
//!
//! ```toml
//! [ayanamsa]
//! system = "lahiri"       # or a numeric id, e.g. system = 1
//!
//! [transition]
//! step_seconds = 1800.0
//! horizon_seconds = 259200.0
//! precision_seconds = 1.0
//! max_iterations = 64
//!
//! [riseset]
//! refraction_arcmin = 34.0
//! semidiameter_arcmin = 16.0
//! altitude_correction = true
//!
//! [anchor]
//! mode = "sunrise"        # or "instant"
//! include_start_times = true
//!
//! [location]
//! latitude_deg = 49.888
//! longitude_deg = -119.496
//! altitude_m = 344.0
//! timezone = "America/Vancouver"
//! ```

pub mod error;
pub mod file;

pub use error::ConfigError;
pub use file::{
    AnchorMode, AnchorSection, AyanamsaSection, ConfigFile, EngineConfig, LocationSection,
    RiseSetSection, SystemSetting, TransitionSection, load,
};
