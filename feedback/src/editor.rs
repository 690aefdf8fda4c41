//! Prompt buffer coupled with the analyzer and the lifecycle controller.
//!
//! Every text change reruns the analyzer from scratch. The new suggestion list
//! is not diffed against the old one; applied state carries over by id only.

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};

use crate::core::analyzer::analyze;
use crate::core::lifecycle::{ApplyOutcome, SuggestionLifecycle};
use crate::core::types::{Analysis, FeedbackSuggestion};

#[derive(Debug, Clone)]
pub struct PromptEditor {
    text: String,
    analysis: Analysis,
    lifecycle: SuggestionLifecycle,
}

impl PromptEditor {
    pub fn new(text: impl Into<String>, collapse_delay: Duration) -> Self {
        let text = text.into();
        let analysis = analyze(&text);
        Self {
            text,
            analysis,
            lifecycle: SuggestionLifecycle::new(collapse_delay),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn lifecycle(&self) -> &SuggestionLifecycle {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut SuggestionLifecycle {
        &mut self.lifecycle
    }

    /// Replace the buffer (e.g. a keystroke) and re-analyze.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.analysis = analyze(&self.text);
    }

    /// Suggestions from the latest analysis paired with their applied flag.
    pub fn suggestions(&self) -> impl Iterator<Item = (&FeedbackSuggestion, bool)> {
        self.analysis
            .suggestions
            .iter()
            .map(|suggestion| (suggestion, self.lifecycle.is_applied(&suggestion.id)))
    }

    /// Apply the suggestion `id` from the latest analysis.
    ///
    /// Re-analyzes when the text changed. Fails only when `id` is not part of
    /// the latest analysis.
    pub fn apply(&mut self, id: &str, now: Instant) -> Result<ApplyOutcome> {
        let suggestion = self
            .analysis
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("no suggestion with id '{id}' in current analysis"))?;
        let outcome = self.lifecycle.apply(&suggestion, &self.text, now);
        if outcome.changed() {
            self.set_text(outcome.text.clone());
        }
        Ok(outcome)
    }
}
