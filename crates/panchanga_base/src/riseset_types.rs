//! Types for sunrise/sunset calculations.

use std::f64::consts::PI;

use panchanga_time::Instant;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Horizon crossings of the Sun's upper limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb appears above the refracted horizon.
    Sunrise,
    /// Upper limb disappears below the refracted horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip correction for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.refraction_arcmin.is_finite() || !(0.0..=120.0).contains(&self.refraction_arcmin)
        {
            return Err("refraction_arcmin must be in [0, 120]");
        }
        if !self.semidiameter_arcmin.is_finite()
            || !(0.0..=60.0).contains(&self.semidiameter_arcmin)
        {
            return Err("semidiameter_arcmin must be in [0, 60]");
        }
        Ok(())
    }

    /// Total horizon depression in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given instant.
    Event { instant: Instant, event: RiseSetEvent },
    /// Sun never rises during this solar day (polar night).
    NeverRises,
    /// Sun never sets during this solar day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The event instant, if the crossing happens.
    pub fn instant(&self) -> Option<Instant> {
        match *self {
            Self::Event { instant, .. } => Some(instant),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert_eq!(c.semidiameter_arcmin, 16.0);
        assert!(c.altitude_correction);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn invalid_config() {
        let c = RiseSetConfig {
            refraction_arcmin: -1.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
        let c = RiseSetConfig {
            semidiameter_arcmin: f64::NAN,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn depression_sea_level() {
        let d = RiseSetConfig::default().horizon_depression_deg(0.0);
        assert_abs_diff_eq!(d, 50.0 / 60.0, epsilon = 1e-10);
    }

    #[test]
    fn depression_1000m() {
        let c = RiseSetConfig::default();
        let d = c.horizon_depression_deg(1000.0);
        let base = 50.0 / 60.0;
        // Dip at 1000m: sqrt(2*1000/6371000) ≈ 0.01772 rad ≈ 1.015 deg
        assert!(d > base + 0.9 && d < base + 1.2, "1000m depression {d}");
    }

    #[test]
    fn depression_no_altitude_correction() {
        let c = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        assert_abs_diff_eq!(
            c.horizon_depression_deg(10_000.0),
            50.0 / 60.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn result_instant() {
        assert_eq!(RiseSetResult::NeverSets.instant(), None);
        let t = Instant::J2000;
        let r = RiseSetResult::Event {
            instant: t,
            event: RiseSetEvent::Sunset,
        };
        assert_eq!(r.instant(), Some(t));
    }
}
