//! Built-in analytic position provider.
//!
//! Evaluates the truncated solar and lunar series directly, so it holds no
//! files or handles and is cheap to construct per thread.

use panchanga_time::Instant;

use crate::error::ProviderError;
use crate::moon::apparent_longitude_latitude;
use crate::nutation::nutation_longitude_deg;
use crate::precession::{PrecessionModel, general_precession_longitude_deg};
use crate::sun::apparent_longitude_deg;
use crate::{Body, EclipticPosition, PositionProvider};

/// Span (Julian centuries of TT from J2000.0) where the series are trusted.
const VALID_CENTURIES: f64 = 30.0;

/// Apparent geocentric Sun/Moon positions from analytic series.
///
/// Live ayanamsa values are produced for mean- and true-equinox systems.
/// Star-anchored systems are declined (`Ok(None)`) so that callers fall
/// back to their declared approximation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticProvider;

impl AnalyticProvider {
    pub fn new() -> Self {
        Self
    }

    fn centuries(instant: Instant) -> Result<f64, ProviderError> {
        let t = instant.centuries_tt();
        if !t.is_finite() || t.abs() > VALID_CENTURIES {
            return Err(ProviderError::OutOfRange {
                jd: instant.jd_utc(),
            });
        }
        Ok(t)
    }
}

impl PositionProvider for AnalyticProvider {
    fn ecliptic_position(
        &self,
        body: Body,
        instant: Instant,
    ) -> Result<EclipticPosition, ProviderError> {
        let t = Self::centuries(instant)?;
        let position = match body {
            Body::Sun => EclipticPosition::new(apparent_longitude_deg(t), 0.0),
            Body::Moon => {
                let (lon, lat) = apparent_longitude_latitude(t);
                EclipticPosition::new(lon, lat)
            }
        };
        Ok(position)
    }

    fn ayanamsa_deg(
        &self,
        model: &PrecessionModel,
        instant: Instant,
    ) -> Result<Option<f64>, ProviderError> {
        let t = Self::centuries(instant)?;
        let value = match *model {
            PrecessionModel::MeanEquinox { j2000_deg } => {
                j2000_deg + general_precession_longitude_deg(t)
            }
            PrecessionModel::TrueEquinox { j2000_deg } => {
                j2000_deg + general_precession_longitude_deg(t) + nutation_longitude_deg(t)
            }
            PrecessionModel::FixedStar { .. } => return Ok(None),
        };
        Ok(Some(value))
    }
}
