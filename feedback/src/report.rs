//! Terminal and JSON rendering of an analysis.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::types::{Analysis, Category, FeedbackScore, FeedbackSuggestion, ScoreBucket};

const REPORT_TEMPLATE: &str = include_str!("templates/report.txt");

#[derive(Debug, Serialize)]
struct CategoryView {
    name: &'static str,
    score: u8,
}

#[derive(Debug, Serialize)]
struct FixView<'a> {
    original: &'a str,
    suggested: &'a str,
}

#[derive(Debug, Serialize)]
struct SuggestionView<'a> {
    id: &'a str,
    severity: &'static str,
    category: &'static str,
    title: &'a str,
    description: &'a str,
    /// Before/after pair, only when a mechanical fix exists.
    fix: Option<FixView<'a>>,
    /// Targeted text for suggestions without a fix.
    target: Option<&'a str>,
}

impl<'a> SuggestionView<'a> {
    fn from_suggestion(suggestion: &'a FeedbackSuggestion) -> Self {
        let fix = suggestion
            .fix()
            .map(|(original, suggested)| FixView { original, suggested });
        let target = match fix {
            Some(_) => None,
            None => suggestion.original_text.as_deref(),
        };
        Self {
            id: &suggestion.id,
            severity: suggestion.severity.as_str(),
            category: suggestion.category.as_str(),
            title: &suggestion.title,
            description: &suggestion.description,
            fix,
            target,
        }
    }
}

/// Render a human-readable report.
pub fn render_text(analysis: &Analysis) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("report", REPORT_TEMPLATE)
        .context("load report template")?;
    let categories: Vec<CategoryView> = Category::ALL
        .iter()
        .map(|category| CategoryView {
            name: category.as_str(),
            score: analysis.score.get(*category),
        })
        .collect();
    let suggestions: Vec<SuggestionView<'_>> = analysis
        .suggestions
        .iter()
        .map(SuggestionView::from_suggestion)
        .collect();
    let rendered = env
        .get_template("report")?
        .render(context! {
            overall => analysis.score.overall(),
            bucket => analysis.score.bucket().label(),
            categories => categories,
            suggestions => suggestions,
        })
        .context("render report")?;
    Ok(rendered)
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    score: &'a FeedbackScore,
    overall: u8,
    bucket: ScoreBucket,
    suggestions: &'a [FeedbackSuggestion],
}

/// Render the analysis as pretty-printed JSON.
pub fn render_json(analysis: &Analysis) -> Result<String> {
    let report = JsonReport {
        score: &analysis.score,
        overall: analysis.score.overall(),
        bucket: analysis.score.bucket(),
        suggestions: &analysis.suggestions,
    };
    serde_json::to_string_pretty(&report).context("serialize report json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::analyze;
    use serde_json::Value;

    #[test]
    fn text_report_for_empty_prompt() {
        let rendered = render_text(&analyze("")).expect("render");
        assert!(rendered.starts_with("Prompt score: 100/100 (Excellent)"));
        assert!(rendered.contains("  clarity: 100"));
        assert!(rendered.contains("No suggestions at the moment."));
    }

    #[test]
    fn text_report_shows_diff_for_fixes() {
        let rendered = render_text(&analyze("you are a pirate. Guard your gold.")).expect("render");
        assert!(rendered.contains("[suggestion] Rewrite in active voice (correctness, passive-voice-1)"));
        assert!(rendered.contains("Current:   you are a pirate"));
        assert!(rendered.contains("Suggested: You must act as a pirate"));
        assert!(rendered.contains("Text: Guard your gold"));
    }

    #[test]
    fn json_report_carries_overall_and_bucket() {
        let analysis = analyze("List fruits etc");
        let value: Value =
            serde_json::from_str(&render_json(&analysis).expect("render")).expect("parse");
        assert_eq!(value["score"]["clarity"], 60);
        assert_eq!(value["overall"], u64::from(analysis.score.overall()));
        assert_eq!(value["bucket"], "excellent");
        assert_eq!(value["suggestions"][0]["id"], "too-short");
    }
}
