//! Logistic map state
//!
//! The state of a single trajectory is the pair:
//! - x: current value, meaningful on [0, 1]
//! - mu: control parameter, bounded dynamics for [0, 4]

use serde::{Deserialize, Serialize};

/// Current point of a logistic-map trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    /// Current value
    pub x: f64,
    /// Control parameter
    pub mu: f64,
}

impl MapState {
    /// Create a new map state. No range checks are applied.
    pub fn new(x: f64, mu: f64) -> Self {
        Self { x, mu }
    }

    /// Apply the map once: x <- mu * x * (1 - x)
    pub fn next(self) -> Self {
        Self {
            x: self.mu * self.x * (1.0 - self.x),
            mu: self.mu,
        }
    }

    /// Absolute derivative of the map at x: mu * |1 - 2x|
    pub fn expansion(&self) -> f64 {
        self.mu * (1.0 - 2.0 * self.x).abs()
    }

    /// Local expansion-rate logarithm ln(mu * |1 - 2x|).
    ///
    /// Unchecked: yields `-inf` at x = 0.5 and NaN for negative `mu`.
    /// [`crate::lyapunov::mean_log_expansion`] is the checked path.
    pub fn log_expansion(&self) -> f64 {
        self.expansion().ln()
    }
}
