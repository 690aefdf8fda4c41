//! Data model shared by the analyzer, the lifecycle controller and renderers.
//!
//! Everything here is ephemeral: values are recomputed on every text change and
//! never mutated in place by the analyzer.

use serde::{Deserialize, Serialize};

/// Scoring dimension a suggestion penalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Correctness,
    Clarity,
    Engagement,
    Delivery,
}

impl Category {
    /// All categories in score order.
    pub const ALL: [Category; 4] = [
        Category::Correctness,
        Category::Clarity,
        Category::Engagement,
        Category::Delivery,
    ];

    /// Points subtracted from this category's score per suggestion.
    pub fn penalty(self) -> usize {
        match self {
            Category::Correctness => 15,
            Category::Clarity => 20,
            Category::Engagement => 15,
            Category::Delivery => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Correctness => "correctness",
            Category::Clarity => "clarity",
            Category::Engagement => "engagement",
            Category::Delivery => "delivery",
        }
    }
}

/// Presentational severity tier. Does not affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Definite defect.
    Error,
    /// Likely defect.
    Warning,
    /// Stylistic improvement.
    Suggestion,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }
}

/// Character offsets into the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

/// One detected issue or improvement opportunity.
///
/// A suggestion carrying `suggested_text` always carries `original_text`, and
/// `original_text` was a literal substring of the text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSuggestion {
    /// Unique within one analysis run; stable while the same rule keeps firing.
    pub id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<TextSpan>,
}

impl FeedbackSuggestion {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            severity,
            title: title.into(),
            description: description.into(),
            original_text: None,
            suggested_text: None,
            position: None,
        }
    }

    /// Point the suggestion at a substring of the analyzed text.
    pub fn targeting(mut self, original: impl Into<String>) -> Self {
        self.original_text = Some(original.into());
        self
    }

    /// Attach a mechanical fix: replace `original` with `suggested`.
    pub fn with_fix(self, original: impl Into<String>, suggested: impl Into<String>) -> Self {
        let mut suggestion = self.targeting(original);
        suggestion.suggested_text = Some(suggested.into());
        suggestion
    }

    /// `(original, suggested)` when a mechanical fix is available.
    pub fn fix(&self) -> Option<(&str, &str)> {
        match (&self.original_text, &self.suggested_text) {
            (Some(original), Some(suggested)) => Some((original.as_str(), suggested.as_str())),
            _ => None,
        }
    }
}

/// Four independent category scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackScore {
    pub correctness: u8,
    pub clarity: u8,
    pub engagement: u8,
    pub delivery: u8,
}

impl Default for FeedbackScore {
    fn default() -> Self {
        Self {
            correctness: 100,
            clarity: 100,
            engagement: 100,
            delivery: 100,
        }
    }
}

impl FeedbackScore {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Correctness => self.correctness,
            Category::Clarity => self.clarity,
            Category::Engagement => self.engagement,
            Category::Delivery => self.delivery,
        }
    }

    /// Rounded mean of the four scores (halves round up).
    pub fn overall(&self) -> u8 {
        let sum: u32 = Category::ALL
            .iter()
            .map(|category| u32::from(self.get(*category)))
            .sum();
        ((sum + 2) / 4) as u8
    }

    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::from_score(self.overall())
    }
}

/// Display bucket for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBucket {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => ScoreBucket::Excellent,
            70..=84 => ScoreBucket::Good,
            50..=69 => ScoreBucket::Fair,
            _ => ScoreBucket::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "Excellent",
            ScoreBucket::Good => "Good",
            ScoreBucket::Fair => "Fair",
            ScoreBucket::NeedsWork => "Needs work",
        }
    }
}

/// Score and suggestions from one analyzer run. Always consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: FeedbackScore,
    pub suggestions: Vec<FeedbackSuggestion>,
}

impl Analysis {
    pub fn get(&self, id: &str) -> Option<&FeedbackSuggestion> {
        self.suggestions.iter().find(|suggestion| suggestion.id == id)
    }

    pub fn count(&self, category: Category) -> usize {
        self.suggestions
            .iter()
            .filter(|suggestion| suggestion.category == category)
            .count()
    }
}
