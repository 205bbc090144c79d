//! Logistic map simulator
//!
//! Owns a single trajectory, records its history and estimates the
//! Lyapunov exponent over a finite horizon.

use crate::lyapunov::mean_log_expansion;
use crate::params::LyapunovParams;
use crate::state::MapState;
use crate::LogmapError;

/// Logistic map trajectory with recorded history
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticMap {
    /// Current state
    state: MapState,
    /// x values recorded since the last clear
    x_history: Vec<f64>,
    /// mu recorded alongside each x
    mu_history: Vec<f64>,
}

impl LogisticMap {
    /// Create a simulator at `x0` with parameter `mu`.
    ///
    /// Both histories start with the initial pair. Out-of-range values are
    /// accepted as is and may produce a divergent trajectory.
    pub fn new(x0: f64, mu: f64) -> Self {
        Self {
            state: MapState::new(x0, mu),
            x_history: vec![x0],
            mu_history: vec![mu],
        }
    }

    /// Advance the map by one iteration and record the new point
    pub fn step(&mut self) {
        self.state = self.state.next();
        self.x_history.push(self.state.x);
        self.mu_history.push(self.state.mu);
    }

    /// Forget the recorded history. The current state is kept.
    pub fn clear(&mut self) {
        self.x_history.clear();
        self.mu_history.clear();
    }

    /// Advance the map `count` times
    pub fn iterate(&mut self, count: usize) {
        self.x_history.reserve(count);
        self.mu_history.reserve(count);
        for _ in 0..count {
            self.step();
        }
    }

    /// Run `transient_count` iterations, then clear the history.
    ///
    /// `x` keeps the value reached after the transient.
    pub fn discard_transient(&mut self, transient_count: usize) {
        self.iterate(transient_count);
        self.clear();
        tracing::debug!(transient_count, x = self.state.x, "discarded transient");
    }

    /// Estimate the Lyapunov exponent.
    ///
    /// Discards `transient_count` iterations, records `sample_count` fresh
    /// ones and returns the mean of ln(mu * |1 - 2x|) over them. The
    /// recorded samples stay available through [`Self::x_history`].
    ///
    /// # Errors
    /// * [`LogmapError::InvalidArgument`] if `sample_count` is zero; the
    ///   simulator is left untouched.
    /// * [`LogmapError::NumericDomain`] if a recorded sample sits exactly on
    ///   x = 0.5 (or the argument is otherwise non-positive or NaN).
    pub fn estimate_lyapunov_exponent(
        &mut self,
        sample_count: usize,
        transient_count: usize,
    ) -> Result<f64, LogmapError> {
        if sample_count == 0 {
            return Err(LogmapError::InvalidArgument(
                "sample_count must be greater than zero".to_string(),
            ));
        }

        self.discard_transient(transient_count);
        self.iterate(sample_count);

        let lam = mean_log_expansion(&self.mu_history, &self.x_history)?;
        tracing::debug!(mu = self.state.mu, sample_count, lam, "lyapunov estimate");
        Ok(lam)
    }

    /// Estimate the Lyapunov exponent with counts taken from `params`
    pub fn lyapunov_exponent(&mut self, params: &LyapunovParams) -> Result<f64, LogmapError> {
        self.estimate_lyapunov_exponent(params.sample_count, params.transient_count)
    }

    /// Get the current state
    pub fn state(&self) -> MapState {
        self.state
    }

    /// Current x
    pub fn x(&self) -> f64 {
        self.state.x
    }

    /// Control parameter
    pub fn mu(&self) -> f64 {
        self.state.mu
    }

    pub fn x_history(&self) -> &[f64] {
        &self.x_history
    }

    pub fn mu_history(&self) -> &[f64] {
        &self.mu_history
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.x_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_history.is_empty()
    }

    /// Recorded `(mu, x)` pairs in iteration order
    pub fn recorded(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mu_history
            .iter()
            .copied()
            .zip(self.x_history.iter().copied())
    }
}

impl Default for LogisticMap {
    fn default() -> Self {
        Self::new(0.5, 3.2)
    }
}
