//! Generic search for the instant a discrete value changes.
//!
//! A coarse scan walks away from the start in fixed steps until the value
//! differs, which brackets the change; bisection then narrows the bracket
//! to the configured precision. The midpoint of the final bracket is
//! reported.

use panchanga_time::Instant;
use tracing::warn;

use crate::transition_types::{SearchDirection, TransitionConfig};

/// Find where `f` first stops returning its value at `start`.
///
/// Forward searches report the next change after `start`; backward searches
/// report the last change before it. `Ok(None)` means no change within
/// `config.horizon_seconds`. Errors from `f` are propagated.
///
/// `f` must be a step function with at most one change per coarse step.
pub fn find_step_change<K, E, F>(
    mut f: F,
    start: Instant,
    direction: SearchDirection,
    config: &TransitionConfig,
) -> Result<Option<Instant>, E>
where
    K: PartialEq,
    F: FnMut(Instant) -> Result<K, E>,
{
    let sign = direction.sign();
    let initial = f(start)?;

    // inner: still `initial`; outer: already changed
    let mut inner = 0.0_f64;
    let mut outer = None;
    while inner < config.horizon_seconds {
        let next = (inner + config.step_seconds).min(config.horizon_seconds);
        if f(start + sign * next)? != initial {
            outer = Some(next);
            break;
        }
        inner = next;
    }
    let Some(mut outer) = outer else {
        warn!(
            %start,
            ?direction,
            horizon_s = config.horizon_seconds,
            "no transition within search horizon"
        );
        return Ok(None);
    };

    for _ in 0..config.max_iterations {
        if outer - inner <= config.precision_seconds {
            break;
        }
        let mid = 0.5 * (inner + outer);
        if f(start + sign * mid)? == initial {
            inner = mid;
        } else {
            outer = mid;
        }
    }

    Ok(Some(start + sign * 0.5 * (inner + outer)))
}
