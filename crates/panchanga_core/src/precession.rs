//! IAU 2006 general precession in ecliptic longitude, and the precession
//! models that sidereal reference systems are built on.
//!
//! Source: Capitaine, Wallace & Chapront 2003, _A&A_ 412, 567-586 (Table 1).

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0. The dominant linear term is
/// ~5028.80″/century (≈50.29″/year).
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// How a sidereal reference system tracks the equinox.
///
/// Every model carries the system's value at J2000.0; the difference lies in
/// what a provider must add to carry it to another epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecessionModel {
    /// Reference value plus general precession (mean equinox of date).
    MeanEquinox { j2000_deg: f64 },
    /// Mean equinox plus nutation in longitude (true equinox of date).
    TrueEquinox { j2000_deg: f64 },
    /// Anchored to a fixed star or galactic reference point. A provider
    /// needs an astrometric catalogue to evaluate it live.
    FixedStar {
        anchor: &'static str,
        j2000_deg: f64,
    },
}

impl PrecessionModel {
    /// Value of the reference system at J2000.0 in degrees.
    pub const fn j2000_deg(&self) -> f64 {
        match *self {
            Self::MeanEquinox { j2000_deg }
            | Self::TrueEquinox { j2000_deg }
            | Self::FixedStar { j2000_deg, .. } => j2000_deg,
        }
    }

    /// Whether the model is tied to the true (nutated) equinox.
    pub const fn uses_true_equinox(&self) -> bool {
        matches!(self, Self::TrueEquinox { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert_abs_diff_eq!(p, 50.29, epsilon = 0.1);
    }

    #[test]
    fn negative_before_j2000() {
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn degrees_consistent() {
        let t = 0.255;
        let arcsec = general_precession_longitude_arcsec(t);
        assert_abs_diff_eq!(
            general_precession_longitude_deg(t),
            arcsec / 3600.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn model_reference_value() {
        let m = PrecessionModel::FixedStar {
            anchor: "Spica",
            j2000_deg: 23.84,
        };
        assert_eq!(m.j2000_deg(), 23.84);
        assert!(!m.uses_true_equinox());
        assert!(PrecessionModel::TrueEquinox { j2000_deg: 1.0 }.uses_true_equinox());
    }
}
