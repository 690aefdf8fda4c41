//! Accept/dismiss state for a suggestion list.
//!
//! Tracks which suggestion is expanded (at most one) and which ids have been
//! applied. Applied state is keyed by id only: a later analysis that emits the
//! same id is treated as already applied, even if it describes a new instance
//! of the issue.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::types::FeedbackSuggestion;

/// Delay between applying a suggestion and collapsing its detail view.
pub const DEFAULT_COLLAPSE_DELAY: Duration = Duration::from_millis(300);

/// What `apply` did to the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStatus {
    /// First occurrence of the original text was replaced.
    Replaced,
    /// Original text no longer present; buffer unchanged, id still marked applied.
    OriginalMissing,
    /// Suggestion has no mechanical fix; buffer unchanged, id still marked applied.
    NoFix,
    /// Id was already applied; nothing changed.
    AlreadyApplied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub text: String,
    pub status: ApplyStatus,
}

impl ApplyOutcome {
    pub fn changed(&self) -> bool {
        self.status == ApplyStatus::Replaced
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionLifecycle {
    applied: BTreeSet<String>,
    expanded: Option<String>,
    collapse_at: Option<Instant>,
    collapse_delay: Duration,
}

impl Default for SuggestionLifecycle {
    fn default() -> Self {
        Self::new(DEFAULT_COLLAPSE_DELAY)
    }
}

impl SuggestionLifecycle {
    pub fn new(collapse_delay: Duration) -> Self {
        Self {
            applied: BTreeSet::new(),
            expanded: None,
            collapse_at: None,
            collapse_delay,
        }
    }

    /// Show `id` in detail view, replacing any other expanded suggestion.
    pub fn expand(&mut self, id: &str) {
        self.expanded = Some(id.to_string());
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.collapse();
        } else {
            self.expand(id);
        }
    }

    /// Close the detail view of `id` without applying it.
    pub fn dismiss(&mut self, id: &str) {
        if self.is_expanded(id) {
            debug!(id, "dismissed suggestion");
            self.collapse();
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn is_applied(&self, id: &str) -> bool {
        self.applied.contains(id)
    }

    pub fn applied_ids(&self) -> impl Iterator<Item = &str> {
        self.applied.iter().map(String::as_str)
    }

    /// Apply `suggestion` to `buffer` and return the new buffer.
    ///
    /// Replacement is literal and first-occurrence only. Unless the id was
    /// already applied, the id is recorded as applied and the detail view is
    /// scheduled to collapse `collapse_delay` after `now`, whether or not the
    /// text changed.
    pub fn apply(
        &mut self,
        suggestion: &FeedbackSuggestion,
        buffer: &str,
        now: Instant,
    ) -> ApplyOutcome {
        if self.is_applied(&suggestion.id) {
            return ApplyOutcome {
                text: buffer.to_string(),
                status: ApplyStatus::AlreadyApplied,
            };
        }

        let outcome = match suggestion.fix() {
            Some((original, suggested)) if buffer.contains(original) => ApplyOutcome {
                text: buffer.replacen(original, suggested, 1),
                status: ApplyStatus::Replaced,
            },
            Some(_) => {
                warn!(id = %suggestion.id, "original text not found; marking applied anyway");
                ApplyOutcome {
                    text: buffer.to_string(),
                    status: ApplyStatus::OriginalMissing,
                }
            }
            None => ApplyOutcome {
                text: buffer.to_string(),
                status: ApplyStatus::NoFix,
            },
        };

        self.applied.insert(suggestion.id.clone());
        self.collapse_at = Some(now + self.collapse_delay);
        debug!(id = %suggestion.id, status = ?outcome.status, "applied suggestion");
        outcome
    }

    /// Fire a pending auto-collapse once its deadline has passed.
    ///
    /// Returns true if the detail view was collapsed by this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.collapse_at {
            Some(deadline) if now >= deadline => {
                self.collapse_at = None;
                let collapsed = self.expanded.is_some();
                self.collapse();
                collapsed
            }
            _ => false,
        }
    }

    pub fn collapse_pending(&self) -> bool {
        self.collapse_at.is_some()
    }
}
