//! Registry of sidereal reference systems (ayanamsas).
//!
//! The ayanamsa is the angular offset between the tropical zodiac (anchored
//! to the vernal equinox) and a sidereal zodiac (anchored to the stars). It
//! grows by roughly 50.3″ per year as the equinox precesses westward.
//!
//! Each system carries its J2000.0 reference value, the [`PrecessionModel`]
//! a [`PositionProvider`] uses to evaluate it live, and a quadratic fallback
//! in Julian years since J1900.0. Numeric ids 0..=39 follow the customary
//! sidereal-mode numbering; id 40 is the true-equinox variant of Lahiri.
//!
//! Reference values for the historical and star-anchored systems are
//! approximate (a few hundredths of a degree).

use std::fmt;
use std::str::FromStr;

use panchanga_core::{PositionProvider, PrecessionModel};
use panchanga_time::Instant;
use tracing::{debug, warn};

/// Julian Date of J1900.0.
const J1900_JD: f64 = 2_415_020.0;

/// Days per Julian year.
const DAYS_PER_YEAR: f64 = 365.25;

/// IAU 2006 linear and quadratic precession coefficients (arcsec per
/// century, arcsec per century²).
const P1: f64 = 5028.796195;
const P2: f64 = 1.1054348;

/// Second-order approximation `c0 + c1·y + c2·y²` in degrees, where `y` is
/// Julian years (TT) since J1900.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackPolynomial {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl FallbackPolynomial {
    /// Calibrate from a J2000.0 reference value and the IAU 2006 general
    /// precession truncated after the quadratic term.
    ///
    /// With `T = y/100 − 1`, `P1·T + P2·T²` expands to the coefficients below.
    pub const fn from_j2000(j2000_deg: f64) -> Self {
        Self {
            c0: j2000_deg - (P1 - P2) / 3600.0,
            c1: (P1 / 100.0 - P2 / 50.0) / 3600.0,
            c2: (P2 / 10_000.0) / 3600.0,
        }
    }

    /// Evaluate at `years` since J1900.0.
    pub fn eval(&self, years: f64) -> f64 {
        self.c0 + years * (self.c1 + years * self.c2)
    }

    /// Evaluate at an instant.
    pub fn at(&self, instant: Instant) -> f64 {
        self.eval(years_since_j1900(instant))
    }
}

/// Julian years of TT since J1900.0.
pub fn years_since_j1900(instant: Instant) -> f64 {
    (instant.jd_tt() - J1900_JD) / DAYS_PER_YEAR
}

/// One sidereal reference system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AyanamsaSystem {
    /// Numeric id.
    pub id: u16,
    /// Display name.
    pub name: &'static str,
    /// Model a provider evaluates for a live value.
    pub model: PrecessionModel,
    /// Approximation used when no live value is available.
    pub fallback: FallbackPolynomial,
}

impl AyanamsaSystem {
    const fn mean(id: u16, name: &'static str, j2000_deg: f64) -> Self {
        Self {
            id,
            name,
            model: PrecessionModel::MeanEquinox { j2000_deg },
            fallback: FallbackPolynomial::from_j2000(j2000_deg),
        }
    }

    const fn true_equinox(id: u16, name: &'static str, j2000_deg: f64) -> Self {
        Self {
            id,
            name,
            model: PrecessionModel::TrueEquinox { j2000_deg },
            fallback: FallbackPolynomial::from_j2000(j2000_deg),
        }
    }

    const fn star(id: u16, name: &'static str, anchor: &'static str, j2000_deg: f64) -> Self {
        Self {
            id,
            name,
            model: PrecessionModel::FixedStar { anchor, j2000_deg },
            fallback: FallbackPolynomial::from_j2000(j2000_deg),
        }
    }

    /// Reference value at J2000.0 in degrees.
    pub const fn reference_j2000_deg(&self) -> f64 {
        self.model.j2000_deg()
    }

    /// Fallback value at `instant`.
    pub fn approx_at(&self, instant: Instant) -> f64 {
        self.fallback.at(instant)
    }

    /// Ayanamsa at `instant`, live from `provider` when it can evaluate this
    /// system, otherwise the declared fallback.
    ///
    /// Provider errors are not propagated: they are logged and the fallback
    /// is returned tagged as [`Ayanamsa::Approx`].
    pub fn degree_at<P: PositionProvider + ?Sized>(
        &self,
        provider: &P,
        instant: Instant,
    ) -> Ayanamsa {
        match provider.ayanamsa_deg(&self.model, instant) {
            Ok(Some(deg)) if deg.is_finite() => Ayanamsa::Live(deg),
            Ok(Some(deg)) => {
                warn!(system = self.name, deg, "provider returned non-finite ayanamsa");
                Ayanamsa::Approx(self.approx_at(instant))
            }
            Ok(None) => {
                debug!(system = self.name, "provider declined model, using fallback");
                Ayanamsa::Approx(self.approx_at(instant))
            }
            Err(e) => {
                warn!(system = self.name, error = %e, "live ayanamsa failed, using fallback");
                Ayanamsa::Approx(self.approx_at(instant))
            }
        }
    }
}

impl fmt::Display for AyanamsaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// An ayanamsa value tagged with its precision tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ayanamsa {
    /// Evaluated by the position provider.
    Live(f64),
    /// Evaluated from the system's fallback polynomial.
    Approx(f64),
}

impl Ayanamsa {
    /// Value in degrees regardless of tier.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Live(d) | Self::Approx(d) => d,
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// Reference to a system by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AyanamsaSelector {
    Id(u16),
    Name(String),
}

impl FromStr for AyanamsaSelector {
    type Err = std::convert::Infallible;

    /// Digits select by id; anything else selects by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u16>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl From<u16> for AyanamsaSelector {
    fn from(id: u16) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for AyanamsaSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for AyanamsaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Id of Lahiri (Chitrapaksha), the default system.
pub const LAHIRI_ID: u16 = 1;

static SYSTEMS: [AyanamsaSystem; 41] = [
    AyanamsaSystem::mean(0, "Fagan/Bradley", 24.740300),
    AyanamsaSystem::mean(1, "Lahiri", 23.857092),
    AyanamsaSystem::mean(2, "De Luce", 27.815753),
    AyanamsaSystem::mean(3, "Raman", 22.410791),
    AyanamsaSystem::mean(4, "Usha/Shashi", 20.057541),
    AyanamsaSystem::mean(5, "Krishnamurti", 23.760240),
    AyanamsaSystem::mean(6, "Djwhal Khul", 28.359679),
    AyanamsaSystem::mean(7, "Yukteshwar", 22.478803),
    AyanamsaSystem::mean(8, "JN Bhasin", 22.762137),
    AyanamsaSystem::mean(9, "Babylonian/Kugler 1", 23.533640),
    AyanamsaSystem::mean(10, "Babylonian/Kugler 2", 24.933640),
    AyanamsaSystem::mean(11, "Babylonian/Kugler 3", 25.783640),
    AyanamsaSystem::mean(12, "Babylonian/Huber", 24.733640),
    AyanamsaSystem::mean(13, "Babylonian/Eta Piscium", 24.522528),
    AyanamsaSystem::mean(14, "Babylonian/Aldebaran 15 Tau", 24.758924),
    AyanamsaSystem::mean(15, "Hipparchos", 20.247788),
    AyanamsaSystem::mean(16, "Sassanian", 19.992959),
    AyanamsaSystem::star(17, "Galactic Center 0 Sag", "Galactic Center", 26.846),
    AyanamsaSystem::mean(18, "J2000", 0.0),
    AyanamsaSystem::mean(19, "J1900", 1.396581),
    AyanamsaSystem::mean(20, "B1950", 0.698370),
    AyanamsaSystem::mean(21, "Suryasiddhanta", 20.895059),
    AyanamsaSystem::mean(22, "Suryasiddhanta, mean Sun", 20.680425),
    AyanamsaSystem::mean(23, "Aryabhata", 20.895060),
    AyanamsaSystem::mean(24, "Aryabhata, mean Sun", 20.657427),
    AyanamsaSystem::mean(25, "SS Revati", 20.103388),
    AyanamsaSystem::mean(26, "SS Citra", 23.005763),
    AyanamsaSystem::star(27, "True Citra", "Spica", 23.8425),
    AyanamsaSystem::star(28, "True Revati", "zeta Piscium", 20.0472),
    AyanamsaSystem::star(29, "True Pushya", "delta Cancri", 22.7282),
    AyanamsaSystem::star(30, "Galactic Center (Gil Brand)", "Galactic Center", 30.10),
    AyanamsaSystem::star(31, "Galactic Equator (IAU1958)", "Galactic Pole IAU1958", 30.10),
    AyanamsaSystem::star(32, "Galactic Equator", "Galactic Pole", 30.12),
    AyanamsaSystem::star(33, "Galactic Equator mid-Mula", "Galactic Node", 23.45),
    AyanamsaSystem::mean(34, "Skydram (Mardyks)", 28.36),
    AyanamsaSystem::star(35, "True Mula (Chandra Hari)", "lambda Scorpii", 24.58),
    AyanamsaSystem::star(36, "Dhruva/Gal.Center/Mula (Wilhelm)", "Galactic Center", 20.04),
    AyanamsaSystem::mean(37, "Aryabhata 522", 20.57),
    AyanamsaSystem::mean(38, "Babylonian/Britton", 24.61),
    AyanamsaSystem::mean(39, "Vedic/Sheoran", 21.74),
    AyanamsaSystem::true_equinox(40, "True Lahiri", 23.857092),
];

/// One row of a registry listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AyanamsaReading {
    pub system: &'static AyanamsaSystem,
    pub value: Ayanamsa,
}

/// Immutable lookup over the static table of systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AyanamsaRegistry;

impl AyanamsaRegistry {
    /// All systems in id order.
    pub fn all() -> &'static [AyanamsaSystem] {
        &SYSTEMS
    }

    /// The default system (Lahiri).
    pub fn lahiri() -> &'static AyanamsaSystem {
        &SYSTEMS[LAHIRI_ID as usize]
    }

    /// Resolve a selector.
    ///
    /// Names match case-insensitively; an exact match wins over the first
    /// system (in id order) whose name contains the query. Returns `None`
    /// when nothing matches.
    pub fn find(selector: &AyanamsaSelector) -> Option<&'static AyanamsaSystem> {
        match selector {
            AyanamsaSelector::Id(id) => SYSTEMS.iter().find(|s| s.id == *id),
            AyanamsaSelector::Name(name) => Self::find_by_name(name),
        }
    }

    fn find_by_name(name: &str) -> Option<&'static AyanamsaSystem> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        SYSTEMS
            .iter()
            .find(|s| s.name.to_lowercase() == query)
            .or_else(|| {
                SYSTEMS
                    .iter()
                    .find(|s| s.name.to_lowercase().contains(&query))
            })
    }

    /// Ayanamsa of the selected system at `instant`, or `None` for an
    /// unknown selector.
    pub fn degree<P: PositionProvider + ?Sized>(
        provider: &P,
        selector: &AyanamsaSelector,
        instant: Instant,
    ) -> Option<Ayanamsa> {
        Self::find(selector).map(|s| s.degree_at(provider, instant))
    }

    /// Every system with its fallback value at `instant`, sorted by degree
    /// ascending (ties by id).
    pub fn list(instant: Instant) -> Vec<AyanamsaReading> {
        sorted(SYSTEMS.iter().map(|system| AyanamsaReading {
            system,
            value: Ayanamsa::Approx(system.approx_at(instant)),
        }))
    }

    /// Like [`list`](Self::list) but evaluated through `provider`, so each
    /// row is live where the provider supports the system.
    pub fn list_live<P: PositionProvider + ?Sized>(
        provider: &P,
        instant: Instant,
    ) -> Vec<AyanamsaReading> {
        sorted(SYSTEMS.iter().map(|system| AyanamsaReading {
            system,
            value: system.degree_at(provider, instant),
        }))
    }
}

fn sorted(rows: impl Iterator<Item = AyanamsaReading>) -> Vec<AyanamsaReading> {
    let mut rows: Vec<_> = rows.collect();
    rows.sort_by(|a, b| {
        a.value
            .degrees()
            .total_cmp(&b.value.degrees())
            .then(a.system.id.cmp(&b.system.id))
    });
    rows
}
