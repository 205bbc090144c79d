use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::params::{LyapunovParams, DEFAULT_SAMPLE_COUNT, DEFAULT_TRANSIENT_COUNT};
use crate::simulator::LogisticMap;
use crate::LogmapError;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "logmap.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRunConfig")]
pub struct RunConfig {
    pub x0: f64,
    pub mu: f64,
    pub sample_count: usize,
    pub transient_count: usize,
}

/// On-disk form: missing and `null` fields both fall back to
/// [`RunConfig::default`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRunConfig {
    x0: Option<f64>,
    mu: Option<f64>,
    sample_count: Option<usize>,
    transient_count: Option<usize>,
}

impl From<RawRunConfig> for RunConfig {
    fn from(raw: RawRunConfig) -> Self {
        let defaults = RunConfig::default();
        Self {
            x0: raw.x0.unwrap_or(defaults.x0),
            mu: raw.mu.unwrap_or(defaults.mu),
            sample_count: raw.sample_count.unwrap_or(defaults.sample_count),
            transient_count: raw.transient_count.unwrap_or(defaults.transient_count),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            x0: 0.5,
            mu: 3.2,
            sample_count: DEFAULT_SAMPLE_COUNT,
            transient_count: DEFAULT_TRANSIENT_COUNT,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), LogmapError> {
        if !self.x0.is_finite() || !self.mu.is_finite() {
            return Err(LogmapError::InvalidConfig(
                "x0 and mu must be finite".to_string(),
            ));
        }

        if self.sample_count == 0 {
            return Err(LogmapError::InvalidConfig(
                "sample_count must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn params(&self) -> LyapunovParams {
        LyapunovParams::new(self.sample_count, self.transient_count)
    }

    pub fn simulator(&self) -> LogisticMap {
        LogisticMap::new(self.x0, self.mu)
    }
}

/// Load a config from `path`, else `logmap.json` in the working directory,
/// else the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig, LogmapError> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let cwd_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if cwd_config.exists() {
        return load_config_file(&cwd_config);
    }

    Ok(RunConfig::default())
}

pub fn load_config_file(path: &Path) -> Result<RunConfig, LogmapError> {
    let raw = fs::read_to_string(path)?;
    let config: RunConfig = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.params(), LyapunovParams::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"mu": 3.9, "x0": null}"#).unwrap();
        assert_eq!(config.mu, 3.9);
        assert_eq!(config.x0, 0.5);
        assert_eq!(config.sample_count, 1000);
        assert_eq!(config.transient_count, 100);
    }

    #[test]
    fn test_null_fields_use_builtin_defaults() {
        let config: RunConfig = serde_json::from_str(
            r#"{"x0": null, "mu": null, "sample_count": null, "transient_count": null}"#,
        )
        .unwrap();
        assert_eq!(config, RunConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_null_mu_still_runs() {
        let config: RunConfig = serde_json::from_str(r#"{"mu": null, "sample_count": 20}"#).unwrap();
        assert_eq!(config.mu, 3.2);
        assert!(crate::sim::run(&config).is_ok());
    }

    #[test]
    fn test_serialized_config_reloads() {
        let config = RunConfig {
            x0: 0.25,
            mu: 3.5,
            sample_count: 10,
            transient_count: 0,
        };
        let raw = serde_json::to_string(&config).unwrap();
        let reloaded: RunConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(reloaded.sample_count, 10);
        assert_eq!(reloaded.transient_count, 0);
    }

    #[test]
    fn test_negative_count_fails_to_parse() {
        let result: Result<RunConfig, _> = serde_json::from_str(r#"{"transient_count": -5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_samples_invalid() {
        let config = RunConfig {
            sample_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LogmapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_finite_mu_invalid() {
        let config = RunConfig {
            mu: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        let config = RunConfig {
            x0: 1.5,
            mu: 4.5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.simulator().x(), 1.5);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"x0": 0.4, "mu": 4.0, "sample_count": 500}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.x0, 0.4);
        assert_eq!(config.mu, 4.0);
        assert_eq!(config.sample_count, 500);
        assert_eq!(config.transient_count, 100);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.json").as_path()));
        assert!(matches!(result, Err(LogmapError::Io(_))));
    }
}
