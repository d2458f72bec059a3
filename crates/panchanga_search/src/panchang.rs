//! Panchanga computation: element classification with start/end times,
//! Vedic-day sunrise bracketing, and the combined daily query.

use panchanga_base::{
    AyanamsaRegistry, AyanamsaSelector, SiderealContext, SiderealPair, SiderealSnapshot,
    karana_from_elongation, kalam_windows, muhurta_windows, nakshatra_from_longitude,
    tithi_from_elongation, vara_at, yoga_from_sum,
};
use panchanga_core::{GeoLocation, PositionProvider, SunriseSolver};
use panchanga_time::Instant;
use tracing::debug;

use crate::error::SearchError;
use crate::panchang_types::{
    Anchor, KaranaInfo, Panchanga, PanchangaConfig, PanchangNakshatraInfo, TithiInfo, VaraInfo,
    VedicDay, YogaInfo,
};
use crate::transition::find_step_change;
use crate::transition_types::SearchDirection;

fn tithi_index(pair: &SiderealPair) -> u8 {
    tithi_from_elongation(pair.elongation_deg()).tithi.index()
}

fn nakshatra_index(pair: &SiderealPair) -> u8 {
    nakshatra_from_longitude(pair.moon_deg).nakshatra.index()
}

fn yoga_index(pair: &SiderealPair) -> u8 {
    yoga_from_sum(pair.sum_deg()).yoga.index()
}

fn karana_index(pair: &SiderealPair) -> u8 {
    karana_from_elongation(pair.elongation_deg()).raw_index
}

/// Start and end of the element containing `anchor`, by searching for the
/// instants `classify` changes value around it.
fn element_bounds<P: PositionProvider + ?Sized>(
    ctx: &SiderealContext<'_, P>,
    anchor: Instant,
    classify: fn(&SiderealPair) -> u8,
    config: &PanchangaConfig,
) -> Result<(Option<Instant>, Option<Instant>), SearchError> {
    let probe = |t: Instant| -> Result<u8, SearchError> { Ok(classify(&ctx.snapshot(t)?.pair)) };
    let end = find_step_change(&probe, anchor, SearchDirection::Forward, &config.transition)?;
    let start = if config.include_start_times {
        find_step_change(&probe, anchor, SearchDirection::Backward, &config.transition)?
    } else {
        None
    };
    Ok((start, end))
}

/// Tithi at a snapshot, with its start and end instants.
pub fn tithi_at<P: PositionProvider + ?Sized>(
    ctx: &SiderealContext<'_, P>,
    snapshot: &SiderealSnapshot,
    config: &PanchangaConfig,
) -> Result<TithiInfo, SearchError> {
    let pos = tithi_from_elongation(snapshot.pair.elongation_deg());
    let (start, end) = element_bounds(ctx, snapshot.instant, tithi_index, config)?;
    Ok(TithiInfo {
        tithi: pos.tithi,
        paksha: pos.tithi.paksha(),
        number: pos.tithi.number(),
        fraction_complete: pos.fraction_complete,
        start,
        end,
        next: pos.tithi.next(),
    })
}

/// Moon's nakshatra at a snapshot, with its start and end instants.
pub fn nakshatra_at<P: PositionProvider + ?Sized>(
    ctx: &SiderealContext<'_, P>,
    snapshot: &SiderealSnapshot,
    config: &PanchangaConfig,
) -> Result<PanchangNakshatraInfo, SearchError> {
    let info = nakshatra_from_longitude(snapshot.pair.moon_deg);
    let (start, end) = element_bounds(ctx, snapshot.instant, nakshatra_index, config)?;
    Ok(PanchangNakshatraInfo {
        nakshatra: info.nakshatra,
        pada: info.pada,
        fraction_complete: info.fraction_complete,
        start,
        end,
        next: info.nakshatra.next(),
    })
}

/// Yoga at a snapshot, with its start and end instants.
///
/// The sum of longitudes depends on the ayanamsa (twice over), unlike the
/// elongation.
pub fn yoga_at<P: PositionProvider + ?Sized>(
    ctx: &SiderealContext<'_, P>,
    snapshot: &SiderealSnapshot,
    config: &PanchangaConfig,
) -> Result<YogaInfo, SearchError> {
    let pos = yoga_from_sum(snapshot.pair.sum_deg());
    let (start, end) = element_bounds(ctx, snapshot.instant, yoga_index, config)?;
    Ok(YogaInfo {
        yoga: pos.yoga,
        fraction_complete: pos.fraction_complete,
        start,
        end,
        next: pos.yoga.next(),
    })
}

/// Karana at a snapshot, with its start and end instants.
pub fn karana_at<P: PositionProvider + ?Sized>(
    ctx: &SiderealContext<'_, P>,
    snapshot: &SiderealSnapshot,
    config: &PanchangaConfig,
) -> Result<KaranaInfo, SearchError> {
    let pos = karana_from_elongation(snapshot.pair.elongation_deg());
    let (start, end) = element_bounds(ctx, snapshot.instant, karana_index, config)?;
    Ok(KaranaInfo {
        karana: pos.karana,
        raw_index: pos.raw_index,
        fraction_complete: pos.fraction_complete,
        start,
        end,
        next: panchanga_base::Karana::from_raw_index(pos.raw_index + 1),
    })
}

/// Sunrise bracket of the Vedic day that contains `instant`.
///
/// The Vedic day runs from sunrise to the next sunrise. Dates are local
/// mean solar dates at the location's longitude; if `instant` precedes that
/// date's sunrise, the previous date's sunrise opens the day.
pub fn vedic_day<S: SunriseSolver + ?Sized>(
    solver: &S,
    instant: Instant,
    location: &GeoLocation,
) -> Result<VedicDay, SearchError> {
    let mut date = instant.local_mean_date(location.longitude_deg);
    let mut today = solver.sunrise_sunset(date, location)?;
    if today.sunrise.is_some_and(|rise| instant < rise) {
        date = date.previous();
        today = solver.sunrise_sunset(date, location)?;
    }
    let tomorrow = solver.sunrise_sunset(date.next(), location)?;
    Ok(VedicDay {
        date,
        sunrise: today.sunrise,
        sunset: today.sunset,
        next_sunrise: tomorrow.sunrise,
    })
}

/// Weekday of the Vedic day, taken from its opening sunrise (or from
/// `instant` when there is none).
pub fn vara_for_day(day: &VedicDay, instant: Instant, location: &GeoLocation) -> VaraInfo {
    let lon = location.longitude_deg;
    let vara = vara_at(day.sunrise.unwrap_or(instant), lon);
    let fraction_complete = match (day.sunrise, day.next_sunrise) {
        (Some(start), Some(end)) if end > start => {
            ((instant - start) / (end - start)).clamp(0.0, 1.0)
        }
        _ => (instant.jd_utc() + lon / 360.0 + 0.5).rem_euclid(1.0),
    };
    VaraInfo {
        vara,
        fraction_complete,
        start: day.sunrise,
        end: day.next_sunrise,
    }
}

/// Full panchanga for `instant` at `location`.
///
/// Resolves the ayanamsa, brackets the Vedic day, classifies the five
/// elements at the anchor, searches each element's start and end, and
/// places the kalam and muhurta windows. Without a sunrise (polar day or
/// night) the elements anchor at `instant` and the windows are empty. The
/// day windows need only sunrise and sunset, so a missing next sunrise
/// drops just the night windows.
pub fn panchanga_for_instant<P, S>(
    provider: &P,
    solver: &S,
    instant: Instant,
    location: &GeoLocation,
    selector: &AyanamsaSelector,
    config: &PanchangaConfig,
) -> Result<Panchanga, SearchError>
where
    P: PositionProvider + ?Sized,
    S: SunriseSolver + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    location.validate().map_err(SearchError::InvalidLocation)?;
    let system = AyanamsaRegistry::find(selector).ok_or_else(|| SearchError::UnknownAyanamsa {
        selector: selector.to_string(),
    })?;

    let day = vedic_day(solver, instant, location)?;
    let anchor = match (config.anchor, day.sunrise) {
        (Anchor::Sunrise, Some(sunrise)) => sunrise,
        (Anchor::Sunrise, None) => {
            debug!(%instant, lat = location.latitude_deg, "no sunrise, anchoring at query instant");
            instant
        }
        (Anchor::Instant, _) => instant,
    };

    let ctx = SiderealContext::new(provider, system);
    let snapshot = ctx.snapshot(anchor)?;
    let tithi = tithi_at(&ctx, &snapshot, config)?;
    let nakshatra = nakshatra_at(&ctx, &snapshot, config)?;
    let yoga = yoga_at(&ctx, &snapshot, config)?;
    let karana = karana_at(&ctx, &snapshot, config)?;
    let vara = vara_for_day(&day, instant, location);

    let halves = day.halves();
    let kalam = kalam_windows(&halves, vara.vara);
    let muhurtas = muhurta_windows(&halves);

    Ok(Panchanga {
        instant,
        location: location.clone(),
        anchor,
        system,
        ayanamsa: snapshot.ayanamsa,
        snapshot,
        day,
        tithi,
        nakshatra,
        yoga,
        karana,
        vara,
        kalam,
        muhurtas,
    })
}
