//! Lyapunov estimation parameters
//!
//! Horizon and transient lengths for the exponent estimate

use serde::{Deserialize, Serialize};

/// Default number of recorded samples averaged by the estimate
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Default number of iterations discarded before recording
pub const DEFAULT_TRANSIENT_COUNT: usize = 100;

/// Parameters for the Lyapunov exponent estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyapunovParams {
    /// Number of recorded iterations averaged (must be > 0)
    pub sample_count: usize,
    /// Number of iterations run and discarded first
    pub transient_count: usize,
}

impl LyapunovParams {
    /// Create new estimation parameters
    pub fn new(sample_count: usize, transient_count: usize) -> Self {
        Self {
            sample_count,
            transient_count,
        }
    }

    /// 1000 samples after a 100-step transient
    pub fn default_params() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            transient_count: DEFAULT_TRANSIENT_COUNT,
        }
    }
}

impl Default for LyapunovParams {
    fn default() -> Self {
        Self::default_params()
    }
}
