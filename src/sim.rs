//! Single-run harness
//!
//! Builds a simulator from a [`RunConfig`], estimates the exponent and
//! packages the recorded trajectory for an external renderer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::output::{create_run_dir, write_summary_json, write_trajectory_csv};
use crate::simulator::LogisticMap;
use crate::LogmapError;

/// One recorded trajectory point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRow {
    /// Iteration index counted from the initial state
    pub step: usize,
    pub mu: f64,
    pub x: f64,
}

/// Scalar outcome of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub x0: f64,
    pub mu: f64,
    pub sample_count: usize,
    pub transient_count: usize,
    pub lyapunov_exponent: f64,
    pub final_x: f64,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub summary: RunSummary,
    /// Post-transient samples the exponent was averaged over
    pub trajectory: Vec<TrajectoryRow>,
}

/// Recorded history of `map` as rows numbered from `first_step`
pub fn trajectory_rows(map: &LogisticMap, first_step: usize) -> Vec<TrajectoryRow> {
    map.recorded()
        .enumerate()
        .map(|(idx, (mu, x))| TrajectoryRow {
            step: first_step + idx,
            mu,
            x,
        })
        .collect()
}

/// Run one estimate for `config`
pub fn run(config: &RunConfig) -> Result<RunResult, LogmapError> {
    config.validate()?;

    let mut map = config.simulator();
    let lyapunov_exponent = map.lyapunov_exponent(&config.params())?;

    tracing::info!(
        x0 = config.x0,
        mu = config.mu,
        lyapunov_exponent,
        "run complete"
    );

    Ok(RunResult {
        summary: RunSummary {
            x0: config.x0,
            mu: config.mu,
            sample_count: config.sample_count,
            transient_count: config.transient_count,
            lyapunov_exponent,
            final_x: map.x(),
        },
        // the first recorded sample is the map applied transient_count + 1 times
        trajectory: trajectory_rows(&map, config.transient_count + 1),
    })
}

/// Run one estimate, then write `trajectory.csv` and `summary.json` into a
/// fresh run directory under `output_root`.
///
/// Nothing is created on disk when the run itself fails.
pub fn run_into_dir(
    config: &RunConfig,
    output_root: &Path,
) -> Result<(PathBuf, RunResult), LogmapError> {
    let result = run(config)?;
    let output_dir = create_run_dir(output_root, config.mu)?;

    let mu_history: Vec<f64> = result.trajectory.iter().map(|row| row.mu).collect();
    let x_history: Vec<f64> = result.trajectory.iter().map(|row| row.x).collect();
    write_trajectory_csv(
        &output_dir.join("trajectory.csv"),
        config.transient_count + 1,
        &mu_history,
        &x_history,
    )?;
    write_summary_json(&output_dir.join("summary.json"), &result.summary)?;

    Ok((output_dir, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_run_default_config() {
        let result = run(&RunConfig::default()).unwrap();
        assert_eq!(result.trajectory.len(), 1000);
        assert_eq!(result.trajectory[0].step, 101);
        assert_eq!(result.trajectory.last().unwrap().step, 1100);
        // mu = 3.2 settles on a stable 2-cycle
        assert!(result.summary.lyapunov_exponent < 0.0);
        assert_eq!(result.summary.final_x, result.trajectory.last().unwrap().x);
    }

    #[test]
    fn test_run_chaotic() {
        let config = RunConfig {
            x0: 0.4,
            mu: 4.0,
            sample_count: 1000,
            transient_count: 200,
        };
        let result = run(&config).unwrap();
        assert_abs_diff_eq!(
            result.summary.lyapunov_exponent,
            std::f64::consts::LN_2,
            epsilon = 0.05
        );
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = RunConfig {
            sample_count: 0,
            ..Default::default()
        };
        assert!(matches!(run(&config), Err(LogmapError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            mu: f64::INFINITY,
            ..Default::default()
        };
        let result = run_into_dir(&config, dir.path());
        assert!(matches!(result, Err(LogmapError::InvalidConfig(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_trajectory_rows_numbering() {
        let mut map = LogisticMap::new(0.2, 3.0);
        map.iterate(2);
        let rows = trajectory_rows(&map, 0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], TrajectoryRow { step: 0, mu: 3.0, x: 0.2 });
        assert_eq!(rows[2].step, 2);
    }

    #[test]
    fn test_run_into_dir_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            sample_count: 50,
            transient_count: 10,
            ..Default::default()
        };
        let (run_dir, result) = run_into_dir(&config, dir.path()).unwrap();
        assert_eq!(run_dir.parent().unwrap(), dir.path());

        let csv = std::fs::read_to_string(run_dir.join("trajectory.csv")).unwrap();
        assert_eq!(csv.lines().count(), 51);
        assert!(csv.lines().nth(1).unwrap().starts_with("11,"));

        let raw = std::fs::read_to_string(run_dir.join("summary.json")).unwrap();
        let summary: RunSummary = serde_json::from_str(&raw).unwrap();
        assert_eq!(summary.sample_count, 50);
        assert_eq!(summary.transient_count, 10);
        assert_abs_diff_eq!(
            summary.lyapunov_exponent,
            result.summary.lyapunov_exponent,
            epsilon = 1e-12
        );
    }
}
