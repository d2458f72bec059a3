//! Configuration for transition searches.

/// Which way in time a search walks from its start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Find the next change after the start (an element's end).
    Forward,
    /// Find the last change before the start (an element's start).
    Backward,
}

impl SearchDirection {
    /// +1 for forward, -1 for backward.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Coarse-scan and bisection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Coarse scan step in seconds (default 1800).
    pub step_seconds: f64,
    /// Farthest distance from the start the scan may reach, in seconds
    /// (default 3 days).
    pub horizon_seconds: f64,
    /// Bisection stops once the bracket is this narrow, in seconds
    /// (default 1).
    pub precision_seconds: f64,
    /// Maximum bisection iterations (default 64).
    pub max_iterations: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            step_seconds: 1800.0,
            horizon_seconds: 3.0 * 86_400.0,
            precision_seconds: 1.0,
            max_iterations: 64,
        }
    }
}

impl TransitionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_seconds.is_finite() || self.step_seconds <= 0.0 {
            return Err("step_seconds must be positive");
        }
        if !self.horizon_seconds.is_finite() || self.horizon_seconds < self.step_seconds {
            return Err("horizon_seconds must be at least step_seconds");
        }
        if !self.precision_seconds.is_finite() || self.precision_seconds <= 0.0 {
            return Err("precision_seconds must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}
