//! Tropical-to-sidereal conversion of Sun and Moon longitudes.
//!
//! This is the only place the ayanamsa is subtracted; everything downstream
//! classifies sidereal values.

use panchanga_core::{Body, PositionProvider};
use panchanga_time::Instant;

use crate::ayanamsa::{Ayanamsa, AyanamsaSystem};
use crate::error::VedicError;
use crate::util::normalize_360;

/// Sidereal longitude in [0, 360) from a tropical longitude and an
/// ayanamsa, both in degrees.
pub fn sidereal_longitude(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}

/// Sidereal Sun and Moon longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPair {
    pub sun_deg: f64,
    pub moon_deg: f64,
}

impl SiderealPair {
    pub fn new(sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            sun_deg: normalize_360(sun_deg),
            moon_deg: normalize_360(moon_deg),
        }
    }

    /// Moon minus Sun, in [0, 360).
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.moon_deg - self.sun_deg)
    }

    /// Sun plus Moon, in [0, 360).
    pub fn sum_deg(&self) -> f64 {
        normalize_360(self.sun_deg + self.moon_deg)
    }
}

/// Sidereal positions sampled at one instant, with the ayanamsa used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealSnapshot {
    pub instant: Instant,
    pub ayanamsa: Ayanamsa,
    pub pair: SiderealPair,
}

/// A provider bound to one reference system.
#[derive(Debug)]
pub struct SiderealContext<'a, P: ?Sized> {
    provider: &'a P,
    system: &'static AyanamsaSystem,
}

impl<P: ?Sized> Clone for SiderealContext<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for SiderealContext<'_, P> {}

impl<'a, P: PositionProvider + ?Sized> SiderealContext<'a, P> {
    pub fn new(provider: &'a P, system: &'static AyanamsaSystem) -> Self {
        Self { provider, system }
    }

    pub fn provider(&self) -> &'a P {
        self.provider
    }

    pub fn system(&self) -> &'static AyanamsaSystem {
        self.system
    }

    /// Ayanamsa of the bound system at `instant`.
    pub fn ayanamsa_at(&self, instant: Instant) -> Ayanamsa {
        self.system.degree_at(self.provider, instant)
    }

    /// Sidereal longitude of one body with a known ayanamsa.
    pub fn body_longitude(
        &self,
        body: Body,
        instant: Instant,
        ayanamsa_deg: f64,
    ) -> Result<f64, VedicError> {
        let pos = self.provider.ecliptic_position(body, instant)?;
        Ok(sidereal_longitude(pos.longitude_deg, ayanamsa_deg))
    }

    /// Sun and Moon sidereal longitudes at `instant`.
    pub fn snapshot(&self, instant: Instant) -> Result<SiderealSnapshot, VedicError> {
        let ayanamsa = self.ayanamsa_at(instant);
        let aya = ayanamsa.degrees();
        let sun = self.body_longitude(Body::Sun, instant, aya)?;
        let moon = self.body_longitude(Body::Moon, instant, aya)?;
        Ok(SiderealSnapshot {
            instant,
            ayanamsa,
            pair: SiderealPair {
                sun_deg: sun,
                moon_deg: moon,
            },
        })
    }
}
