//! Collaborator contracts and the built-in analytic provider.
//!
//! The panchanga engine consumes two collaborators:
//! - a [`PositionProvider`] answering tropical ecliptic positions and live
//!   ayanamsa values, and
//! - a [`SunriseSolver`] answering sunrise/sunset for a date and place.
//!
//! Both are traits so an ephemeris-backed implementation can be swapped in.
//! This crate also ships [`AnalyticProvider`], a self-contained Sun/Moon
//! theory accurate to a few arcseconds, and the frame helpers it needs.

pub mod analytic;
pub mod error;
pub mod moon;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod session;
pub mod sun;

use panchanga_time::{CivilDate, Instant};

pub use analytic::AnalyticProvider;
pub use error::ProviderError;
pub use nutation::{nutation_arcsec, nutation_longitude_deg};
pub use obliquity::{ecliptic_to_equatorial, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{
    PrecessionModel, general_precession_longitude_arcsec, general_precession_longitude_deg,
};
pub use session::with_provider;

/// Bodies whose positions the engine requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Geocentric ecliptic coordinates of date, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude in [0, 360).
    pub longitude_deg: f64,
    /// Latitude in [-90, 90].
    pub latitude_deg: f64,
}

impl EclipticPosition {
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
        }
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
    /// IANA zone name, carried for display only.
    pub timezone: Option<String>,
}

impl GeoLocation {
    /// Create a location without a display time zone.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            timezone: None,
        }
    }

    /// Attach a display time zone name.
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Check coordinate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude must be in [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude must be in [-180, 180]");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude must be finite");
        }
        Ok(())
    }
}

/// Sunrise and sunset on one civil date. `None` marks a crossing that does
/// not happen (polar day or night).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
}

/// Source of geocentric positions and precession corrections.
pub trait PositionProvider {
    /// Apparent tropical ecliptic position of `body` at `instant`.
    fn ecliptic_position(
        &self,
        body: Body,
        instant: Instant,
    ) -> Result<EclipticPosition, ProviderError>;

    /// Live ayanamsa in degrees for a precession model.
    ///
    /// `Ok(None)` means the provider cannot evaluate this model; callers
    /// then use their own approximation.
    fn ayanamsa_deg(
        &self,
        model: &PrecessionModel,
        instant: Instant,
    ) -> Result<Option<f64>, ProviderError>;
}

impl<T: PositionProvider + ?Sized> PositionProvider for &T {
    fn ecliptic_position(
        &self,
        body: Body,
        instant: Instant,
    ) -> Result<EclipticPosition, ProviderError> {
        (**self).ecliptic_position(body, instant)
    }

    fn ayanamsa_deg(
        &self,
        model: &PrecessionModel,
        instant: Instant,
    ) -> Result<Option<f64>, ProviderError> {
        (**self).ayanamsa_deg(model, instant)
    }
}

/// Source of refraction-corrected sunrise/sunset instants.
pub trait SunriseSolver {
    /// Sunrise and sunset on `date` (local mean solar date at `location`).
    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, ProviderError>;
}

impl<T: SunriseSolver + ?Sized> SunriseSolver for &T {
    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, ProviderError> {
        (**self).sunrise_sunset(date, location)
    }
}
