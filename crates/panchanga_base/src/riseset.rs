//! Sunrise/sunset by iterative hour-angle refinement.
//!
//! The Sun's apparent ecliptic position comes from any
//! [`PositionProvider`]; it is rotated to the equator with the true
//! obliquity and compared against local mean sidereal time. Each iteration
//! recomputes the Sun's place at the current estimate and moves the
//! estimate by the hour-angle error.
//!
//! Sources: Meeus, _Astronomical Algorithms_ ch. 15; Montenbruck & Pfleger.

use panchanga_core::{
    Body, GeoLocation, PositionProvider, ProviderError, SunTimes, SunriseSolver,
    ecliptic_to_equatorial, true_obliquity_deg,
};
use panchanga_time::{CivilDate, Instant, SIDEREAL_RATE, local_sidereal_time_deg};
use tracing::debug;

use crate::error::VedicError;
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Hour angle advance in degrees per UT day.
const HOUR_ANGLE_RATE_DEG: f64 = 360.0 * SIDEREAL_RATE;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Sun's apparent right ascension and declination in degrees.
fn sun_ra_dec<P: PositionProvider + ?Sized>(
    provider: &P,
    instant: Instant,
) -> Result<(f64, f64), VedicError> {
    let pos = provider.ecliptic_position(Body::Sun, instant)?;
    let eps = true_obliquity_deg(instant.centuries_tt());
    Ok(ecliptic_to_equatorial(
        pos.longitude_deg,
        pos.latitude_deg,
        eps,
    ))
}

/// Wrap an angle in degrees to [-180, 180).
fn wrap_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Cosine of the hour angle at which the Sun reaches altitude `h0_deg`.
fn cos_hour_angle(h0_deg: f64, lat_deg: f64, dec_deg: f64) -> f64 {
    let (h0, phi, dec) = (h0_deg.to_radians(), lat_deg.to_radians(), dec_deg.to_radians());
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Compute a single rise/set event for the Sun.
///
/// `jd_utc_noon` is the approximate local noon of the desired date; use
/// [`approximate_local_noon_jd`].
pub fn compute_rise_set<P: PositionProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    config.validate().map_err(VedicError::InvalidConfig)?;
    location.validate().map_err(VedicError::InvalidLocation)?;

    let lat = location.latitude_deg;
    let h0_deg = -config.horizon_depression_deg(location.altitude_m);
    let noon = Instant::from_jd_utc(jd_utc_noon);

    let (ra, dec) = sun_ra_dec(provider, noon)?;
    let cos_h0 = cos_hour_angle(h0_deg, lat, dec);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit: hour angle zero.
    let ha_noon = wrap_180(local_sidereal_time_deg(noon, location.longitude_deg) - ra);
    let jd_transit = jd_utc_noon - ha_noon / HOUR_ANGLE_RATE_DEG;

    let h0_days = cos_h0.acos().to_degrees() / HOUR_ANGLE_RATE_DEG;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let at = Instant::from_jd_utc(jd_event);
        let (ra_i, dec_i) = sun_ra_dec(provider, at)?;

        let cos_h = cos_hour_angle(h0_deg, lat, dec_i);
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h.acos().to_degrees();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let ha_actual = wrap_180(local_sidereal_time_deg(at, location.longitude_deg) - ra_i);
        let correction = wrap_180(ha_target - ha_actual) / HOUR_ANGLE_RATE_DEG;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        instant: Instant::from_jd_utc(jd_event),
        event,
    })
}

/// Sunrise and sunset on a local mean solar date.
pub fn sun_times<P: PositionProvider + ?Sized>(
    provider: &P,
    date: CivilDate,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<SunTimes, VedicError> {
    let noon = approximate_local_noon_jd(date.jd_midnight(), location.longitude_deg);
    let rise = compute_rise_set(provider, location, RiseSetEvent::Sunrise, noon, config)?;
    let set = compute_rise_set(provider, location, RiseSetEvent::Sunset, noon, config)?;
    if rise.instant().is_none() || set.instant().is_none() {
        debug!(
            %date,
            lat = location.latitude_deg,
            ?rise,
            ?set,
            "no horizon crossing"
        );
    }
    Ok(SunTimes {
        sunrise: rise.instant(),
        sunset: set.instant(),
    })
}

/// [`SunriseSolver`] that finds horizon crossings with a position provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizonSolver<P> {
    provider: P,
    config: RiseSetConfig,
}

impl<P: PositionProvider> HorizonSolver<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: RiseSetConfig::default(),
        }
    }

    pub fn with_config(provider: P, config: RiseSetConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }
}

impl<P: PositionProvider> SunriseSolver for HorizonSolver<P> {
    fn sunrise_sunset(
        &self,
        date: CivilDate,
        location: &GeoLocation,
    ) -> Result<SunTimes, ProviderError> {
        sun_times(&self.provider, date, location, &self.config).map_err(|e| match e {
            VedicError::Provider(p) => p,
            VedicError::InvalidLocation(msg) => ProviderError::InvalidLocation(msg),
            VedicError::Time(t) => ProviderError::Time(t),
            other => ProviderError::Unavailable(other.to_string()),
        })
    }
}
