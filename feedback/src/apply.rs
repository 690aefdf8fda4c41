//! Orchestration for `prompt-feedback apply`.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::core::lifecycle::ApplyStatus;
use crate::editor::PromptEditor;
use crate::io::config::FeedbackConfig;

/// Final text plus the per-id status, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedText {
    pub text: String,
    pub outcomes: Vec<(String, ApplyStatus)>,
}

/// Apply suggestion ids in order, re-analyzing between each.
///
/// Each id must exist in the analysis current at the time it is applied.
pub fn apply_suggestions(text: &str, ids: &[String], config: &FeedbackConfig) -> Result<AppliedText> {
    let mut editor = PromptEditor::new(text, config.collapse_delay());
    let mut outcomes = Vec::with_capacity(ids.len());
    for id in ids {
        let outcome = editor
            .apply(id, Instant::now())
            .with_context(|| format!("apply suggestion '{id}'"))?;
        outcomes.push((id.clone(), outcome.status));
    }
    Ok(AppliedText {
        text: editor.text().to_string(),
        outcomes,
    })
}
