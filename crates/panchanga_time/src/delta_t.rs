//! ΔT = TT − UT1 from the Espenak & Meeus piecewise polynomials.
//!
//! Source: F. Espenak and J. Meeus, _Five Millennium Canon of Solar Eclipses_
//! (NASA/TP-2006-214141), section 2.6. Accuracy is a few seconds for the
//! modern era, which is well below what the analytic Sun/Moon series resolve.

/// Decimal year for a Julian Date (UT), mid-month convention not applied.
pub fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - crate::J2000_JD) / 365.25
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        let u = y / 100.0;
        horner(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        horner(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        let t = y - 1600.0;
        horner(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        let t = y - 1700.0;
        horner(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        let t = y - 1800.0;
        horner(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        let t = y - 1860.0;
        horner(
            t,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        )
    } else if y < 1920.0 {
        let t = y - 1900.0;
        horner(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if y < 1941.0 {
        let t = y - 1920.0;
        horner(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        let t = y - 1950.0;
        horner(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        let t = y - 1975.0;
        horner(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        let t = y - 2000.0;
        horner(
            t,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if y < 2050.0 {
        let t = y - 2000.0;
        horner(t, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// ΔT in seconds at a Julian Date (UT).
pub fn delta_t_at_jd(jd_ut: f64) -> f64 {
    delta_t_seconds(decimal_year(jd_ut))
}

/// Evaluate a polynomial with ascending coefficients.
fn horner(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_2025_plausible() {
        // Observed ≈ 69 s; the extrapolation overshoots by a few seconds
        let dt = delta_t_seconds(2025.5);
        assert!((65.0..80.0).contains(&dt), "ΔT(2025.5) = {dt}");
    }

    #[test]
    fn year_1900_near_zero() {
        let dt = delta_t_seconds(1900.0);
        assert!((dt + 2.79).abs() < 0.01, "ΔT(1900) = {dt}");
    }

    #[test]
    fn continuous_at_2005_boundary() {
        let before = delta_t_seconds(2004.999_9);
        let after = delta_t_seconds(2005.0);
        assert!((before - after).abs() < 0.5, "{before} vs {after}");
    }

    #[test]
    fn horner_matches_direct() {
        let x: f64 = 1.7;
        let direct = 2.0 + 3.0 * x + 0.5 * x * x;
        assert!((horner(x, &[2.0, 3.0, 0.5]) - direct).abs() < 1e-12);
    }

    #[test]
    fn decimal_year_at_j2000() {
        assert!((decimal_year(crate::J2000_JD) - 2000.0).abs() < 1e-12);
    }
}
