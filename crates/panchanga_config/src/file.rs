//! File layout and resolution into runtime configuration.

use std::fs;
use std::path::Path;

use panchanga_base::{AyanamsaRegistry, AyanamsaSelector, LAHIRI_ID, RiseSetConfig};
use panchanga_core::GeoLocation;
use panchanga_search::{Anchor, PanchangaConfig, TransitionConfig};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Top-level file layout. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub ayanamsa: AyanamsaSection,
    pub transition: TransitionSection,
    pub riseset: RiseSetSection,
    pub anchor: AnchorSection,
    pub location: Option<LocationSection>,
}

/// `system = 1` or `system = "lahiri"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SystemSetting {
    Id(u16),
    Name(String),
}

impl Default for SystemSetting {
    fn default() -> Self {
        Self::Id(LAHIRI_ID)
    }
}

impl From<&SystemSetting> for AyanamsaSelector {
    fn from(s: &SystemSetting) -> Self {
        match s {
            SystemSetting::Id(id) => AyanamsaSelector::Id(*id),
            SystemSetting::Name(name) => AyanamsaSelector::Name(name.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AyanamsaSection {
    pub system: SystemSetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionSection {
    pub step_seconds: f64,
    pub horizon_seconds: f64,
    pub precision_seconds: f64,
    pub max_iterations: u32,
}

impl Default for TransitionSection {
    fn default() -> Self {
        let c = TransitionConfig::default();
        Self {
            step_seconds: c.step_seconds,
            horizon_seconds: c.horizon_seconds,
            precision_seconds: c.precision_seconds,
            max_iterations: c.max_iterations,
        }
    }
}

impl From<TransitionSection> for TransitionConfig {
    fn from(s: TransitionSection) -> Self {
        Self {
            step_seconds: s.step_seconds,
            horizon_seconds: s.horizon_seconds,
            precision_seconds: s.precision_seconds,
            max_iterations: s.max_iterations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiseSetSection {
    pub refraction_arcmin: f64,
    pub semidiameter_arcmin: f64,
    pub altitude_correction: bool,
}

impl Default for RiseSetSection {
    fn default() -> Self {
        let c = RiseSetConfig::default();
        Self {
            refraction_arcmin: c.refraction_arcmin,
            semidiameter_arcmin: c.semidiameter_arcmin,
            altitude_correction: c.altitude_correction,
        }
    }
}

impl From<RiseSetSection> for RiseSetConfig {
    fn from(s: RiseSetSection) -> Self {
        Self {
            refraction_arcmin: s.refraction_arcmin,
            semidiameter_arcmin: s.semidiameter_arcmin,
            altitude_correction: s.altitude_correction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    #[default]
    Sunrise,
    Instant,
}

impl From<AnchorMode> for Anchor {
    fn from(m: AnchorMode) -> Self {
        match m {
            AnchorMode::Sunrise => Anchor::Sunrise,
            AnchorMode::Instant => Anchor::Instant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorSection {
    pub mode: AnchorMode,
    pub include_start_times: bool,
}

impl Default for AnchorSection {
    fn default() -> Self {
        Self {
            mode: AnchorMode::Sunrise,
            include_start_times: true,
        }
    }
}

/// Default observer. Latitude and longitude are required when the section
/// is present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSection {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<&LocationSection> for GeoLocation {
    fn from(s: &LocationSection) -> Self {
        let loc = GeoLocation::new(s.latitude_deg, s.longitude_deg, s.altitude_m);
        match &s.timezone {
            Some(tz) => loc.with_timezone(tz.clone()),
            None => loc,
        }
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub ayanamsa: AyanamsaSelector,
    pub panchanga: PanchangaConfig,
    pub riseset: RiseSetConfig,
    pub location: Option<GeoLocation>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaSelector::Id(LAHIRI_ID),
            panchanga: PanchangaConfig::default(),
            riseset: RiseSetConfig::default(),
            location: None,
        }
    }
}

impl ConfigFile {
    /// Parse a TOML document.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text)?;
        debug!(path = %path.display(), "configuration file loaded");
        Ok(file)
    }

    /// Convert into runtime structs and validate every section.
    pub fn resolve(&self) -> Result<EngineConfig, ConfigError> {
        let ayanamsa = AyanamsaSelector::from(&self.ayanamsa.system);
        if AyanamsaRegistry::find(&ayanamsa).is_none() {
            return Err(ConfigError::UnknownAyanamsa(ayanamsa.to_string()));
        }

        let panchanga = PanchangaConfig {
            transition: self.transition.into(),
            anchor: self.anchor.mode.into(),
            include_start_times: self.anchor.include_start_times,
        };
        panchanga.validate().map_err(ConfigError::Invalid)?;

        let riseset = RiseSetConfig::from(self.riseset);
        riseset.validate().map_err(ConfigError::Invalid)?;

        let location = match &self.location {
            Some(section) => {
                let loc = GeoLocation::from(section);
                loc.validate().map_err(ConfigError::Invalid)?;
                Some(loc)
            }
            None => None,
        };

        Ok(EngineConfig {
            ayanamsa,
            panchanga,
            riseset,
            location,
        })
    }
}

/// Load and resolve a configuration file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    ConfigFile::from_file(path)?.resolve()
}
