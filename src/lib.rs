//! logmap - logistic map trajectories and Lyapunov exponents
//!
//! Iterates the logistic map x <- mu * x * (1 - x), records the trajectory
//! and estimates the Lyapunov exponent as the mean of ln(mu * |1 - 2x|)
//! after discarding a transient.

pub mod config;
pub mod lyapunov;
pub mod output;
pub mod params;
pub mod sim;
pub mod simulator;
pub mod state;

use thiserror::Error;

// Re-export main types
pub use config::RunConfig;
pub use params::LyapunovParams;
pub use sim::{run, run_into_dir, RunResult, RunSummary, TrajectoryRow};
pub use simulator::LogisticMap;
pub use state::MapState;

#[derive(Debug, Error)]
pub enum LogmapError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("logarithm of non-positive argument {argument} at sample {index} (x = {x}, mu = {mu})")]
    NumericDomain {
        index: usize,
        x: f64,
        mu: f64,
        argument: f64,
    },
    #[error("{context} length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },
}
