//! Lyapunov exponent accumulation
//!
//! Averages the local expansion-rate logarithm ln(mu * |1 - 2x|) over a
//! recorded trajectory.

use crate::state::MapState;
use crate::LogmapError;

/// Mean of ln(mu * |1 - 2x|) over parallel `mu`/`x` histories.
///
/// Fails with [`LogmapError::NumericDomain`] on the first sample whose
/// argument is zero, negative or NaN instead of folding `-inf`/NaN into the
/// mean. A `+inf` argument from a divergent trajectory passes through.
pub fn mean_log_expansion(mu_history: &[f64], x_history: &[f64]) -> Result<f64, LogmapError> {
    if mu_history.len() != x_history.len() {
        return Err(LogmapError::LengthMismatch {
            context: "mu_history vs x_history",
            expected: x_history.len(),
            got: mu_history.len(),
        });
    }

    if x_history.is_empty() {
        return Err(LogmapError::InvalidArgument(
            "cannot average an empty trajectory".to_string(),
        ));
    }

    let mut sum = 0.0;
    for (index, (&mu, &x)) in mu_history.iter().zip(x_history.iter()).enumerate() {
        let state = MapState::new(x, mu);
        let argument = state.expansion();

        if argument.is_nan() || argument <= 0.0 {
            tracing::warn!(index, x, mu, argument, "logarithm argument outside domain");
            return Err(LogmapError::NumericDomain {
                index,
                x,
                mu,
                argument,
            });
        }

        sum += state.log_expansion();
    }

    Ok(sum / x_history.len() as f64)
}
