//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs that would round to exactly 360 map to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Index of the equal segment of width `span` that contains `deg`, and the
/// fraction of that segment already traversed.
///
/// `count` caps the index so floating-point edge cases stay in range.
pub(crate) fn segment_of(deg: f64, span: f64, count: u8) -> (u8, f64) {
    let lon = normalize_360(deg);
    let idx = ((lon / span).floor() as u8).min(count - 1);
    let fraction = ((lon - idx as f64 * span) / span).clamp(0.0, 1.0 - f64::EPSILON);
    (idx, fraction)
}
