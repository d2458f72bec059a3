//! Transition search and panchanga assembly.
//!
//! This crate provides:
//! - A generic step-change finder (coarse scan plus bisection)
//! - Start/end instants for tithi, nakshatra, yoga and karana
//! - Vedic-day sunrise bracketing
//! - The combined daily panchanga with kalam and muhurta windows

pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod transition;
pub mod transition_types;

pub use error::SearchError;
pub use panchang::{
    karana_at, nakshatra_at, panchanga_for_instant, tithi_at, vara_for_day, vedic_day, yoga_at,
};
pub use panchang_types::{
    Anchor, ElementKind, KaranaInfo, Panchanga, PanchangaConfig, PanchangaElement,
    PanchangNakshatraInfo, TithiInfo, VaraInfo, VedicDay, YogaInfo,
};
pub use transition::find_step_change;
pub use transition_types::{SearchDirection, TransitionConfig};
