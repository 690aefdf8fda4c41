//! Orchestration for `prompt-feedback analyze`.

use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::info;

use crate::core::analyzer::analyze;
use crate::core::types::Analysis;
use crate::io::agent::load_agent;
use crate::io::config::{FeedbackConfig, ReportFormat};
use crate::io::source::read_prompt;
use crate::report::{render_json, render_text};

/// Inputs for one analysis run. `None` fields fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Prompt file; stdin when `None` or `-`.
    pub path: Option<PathBuf>,
    /// Treat `path` as an agent definition and analyze its prompt.
    pub agent: bool,
    pub format: Option<ReportFormat>,
    pub min_score: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct CheckOutput {
    pub analysis: Analysis,
    pub report: String,
    /// False when the overall score is below the effective minimum.
    pub passed: bool,
}

pub fn run_check(options: &CheckOptions, config: &FeedbackConfig) -> Result<CheckOutput> {
    let text = if options.agent {
        let Some(path) = options.path.as_deref() else {
            bail!("--agent requires a file path");
        };
        load_agent(path)?.prompt
    } else {
        read_prompt(options.path.as_deref())?
    };
    check_text(&text, options, config)
}

/// Analyze `text` and render it according to options and config.
pub fn check_text(text: &str, options: &CheckOptions, config: &FeedbackConfig) -> Result<CheckOutput> {
    let min_score = options.min_score.unwrap_or(config.report.min_overall_score);
    if min_score > 100 {
        bail!("minimum score must be <= 100, got {min_score}");
    }
    let analysis = analyze(text);
    let report = match options.format.unwrap_or(config.report.format) {
        ReportFormat::Text => render_text(&analysis)?,
        ReportFormat::Json => render_json(&analysis)?,
    };
    let overall = analysis.score.overall();
    let passed = overall >= min_score;
    info!(overall, min_score, passed, "checked prompt");
    Ok(CheckOutput {
        analysis,
        report,
        passed,
    })
}
