use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use csv::Writer;

use crate::sim::RunSummary;
use crate::LogmapError;

/// Create `<root>/mu_<mu>_<UTC timestamp>` for one run.
///
/// Runs started within the same second get a `-NN` suffix.
pub fn create_run_dir(root: &Path, mu: f64) -> Result<PathBuf, LogmapError> {
    fs::create_dir_all(root)?;

    let stem = format!("mu_{mu:.4}_{}", Utc::now().format("%Y%m%dT%H%M%SZ"));
    let mut run_dir = root.join(&stem);
    let mut suffix = 1_u32;
    while run_dir.exists() {
        run_dir = root.join(format!("{stem}-{suffix:02}"));
        suffix += 1;
    }

    fs::create_dir(&run_dir)?;
    Ok(run_dir)
}

fn fmt_sample(value: f64) -> String {
    format!("{value:.10}")
}

/// Write recorded histories as `step,mu,x` rows, numbering from `first_step`
pub fn write_trajectory_csv(
    path: &Path,
    first_step: usize,
    mu_history: &[f64],
    x_history: &[f64],
) -> Result<(), LogmapError> {
    if mu_history.len() != x_history.len() {
        return Err(LogmapError::LengthMismatch {
            context: "trajectory mu_history",
            expected: x_history.len(),
            got: mu_history.len(),
        });
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record(["step", "mu", "x"])?;

    for (offset, (&mu, &x)) in mu_history.iter().zip(x_history).enumerate() {
        writer.write_record([(first_step + offset).to_string(), fmt_sample(mu), fmt_sample(x)])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<(), LogmapError> {
    fs::write(path, serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
