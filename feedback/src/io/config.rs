//! Feedback configuration stored in `.prompt-feedback.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".prompt-feedback.toml";

/// Feedback configuration (TOML).
///
/// Missing fields default to the interactive defaults. Scoring penalties are
/// fixed and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Delay before an applied suggestion's detail view collapses.
    pub collapse_delay_ms: u64,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,

    /// `analyze` exits with `BELOW_THRESHOLD` when the overall score is lower.
    /// `0` disables the gate.
    pub min_overall_score: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            min_overall_score: 0,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            collapse_delay_ms: 300,
            report: ReportConfig::default(),
        }
    }
}

impl FeedbackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.collapse_delay_ms == 0 {
            return Err(anyhow!("collapse_delay_ms must be > 0"));
        }
        if self.report.min_overall_score > 100 {
            return Err(anyhow!("report.min_overall_score must be <= 100"));
        }
        Ok(())
    }

    pub fn collapse_delay(&self) -> Duration {
        Duration::from_millis(self.collapse_delay_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FeedbackConfig::default()`.
pub fn load_config(path: &Path) -> Result<FeedbackConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = FeedbackConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FeedbackConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn load_missing_returns_default() {
        let dir = TestDir::new().expect("tempdir");
        let cfg = load_config(&dir.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FeedbackConfig::default());
        assert_eq!(cfg.collapse_delay(), Duration::from_millis(300));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("config.toml", "[report]\nmin_overall_score = 70\n")
            .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.report.min_overall_score, 70);
        assert_eq!(cfg.report.format, ReportFormat::Text);
        assert_eq!(cfg.collapse_delay_ms, 300);
    }

    #[test]
    fn parses_json_format() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("config.toml", "collapse_delay_ms = 50\n[report]\nformat = \"json\"\n")
            .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.report.format, ReportFormat::Json);
        assert_eq!(cfg.collapse_delay_ms, 50);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir
            .write("config.toml", "[report]\nmin_overall_score = 101\n")
            .expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("min_overall_score"));
    }

    #[test]
    fn rejects_zero_delay() {
        let cfg = FeedbackConfig {
            collapse_delay_ms: 0,
            ..FeedbackConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
