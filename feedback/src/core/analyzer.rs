//! Prompt analyzer: text in, score and suggestions out.
//!
//! Every call reruns the full rule pipeline from scratch. Rule outcomes depend
//! on the whole text (word counts, keyword presence), so there is no caching.

use tracing::debug;

use crate::core::rules::RULES;
use crate::core::types::{Analysis, Category, FeedbackScore, FeedbackSuggestion};

/// Run every rule in order and score the result.
///
/// Deterministic and total: identical input yields identical output, and the
/// empty string yields a perfect score with no suggestions.
pub fn analyze(text: &str) -> Analysis {
    let suggestions: Vec<FeedbackSuggestion> =
        RULES.iter().flat_map(|rule| (rule.check)(text)).collect();
    let score = score_suggestions(&suggestions);
    debug!(
        bytes = text.len(),
        suggestions = suggestions.len(),
        overall = score.overall(),
        "analyzed prompt"
    );
    Analysis { score, suggestions }
}

/// `max(0, 100 - count * penalty)` per category.
pub fn score_suggestions(suggestions: &[FeedbackSuggestion]) -> FeedbackScore {
    let category_score = |category: Category| -> u8 {
        let count = suggestions
            .iter()
            .filter(|suggestion| suggestion.category == category)
            .count();
        100usize.saturating_sub(count.saturating_mul(category.penalty())) as u8
    };
    FeedbackScore {
        correctness: category_score(Category::Correctness),
        clarity: category_score(Category::Clarity),
        engagement: category_score(Category::Engagement),
        delivery: category_score(Category::Delivery),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Severity;
    use crate::test_support::words;

    fn ids(analysis: &Analysis) -> Vec<&str> {
        analysis.suggestions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn empty_text_is_perfect() {
        let analysis = analyze("");
        assert_eq!(analysis.score, FeedbackScore::default());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "you are a helpful bot. Answer your users! Always be kind etc";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn output_follows_rule_order() {
        let text = format!(
            "you are a pirate. Guard your gold etc {} never",
            words(600)
        );
        let analysis = analyze(&text);
        assert_eq!(
            ids(&analysis),
            vec![
                "passive-voice-1",
                "punctuation-0",
                "vague-language",
                "add-examples",
                "add-structure",
                "too-long",
                "strong-language",
            ]
        );
    }

    #[test]
    fn nine_words_is_too_short_ten_is_not() {
        assert!(analyze(&words(9)).get("too-short").is_some());
        assert!(analyze(&words(10)).get("too-short").is_none());
    }

    #[test]
    fn word_limit_boundary() {
        assert!(analyze(&words(500)).get("too-long").is_none());
        let analysis = analyze(&words(501));
        let too_long = analysis.get("too-long").expect("too-long fires");
        assert!(too_long.description.contains("501"));
        assert_eq!(too_long.category, Category::Delivery);
        assert_eq!(too_long.severity, Severity::Warning);
    }

    #[test]
    fn two_clarity_hits_score_sixty() {
        let analysis = analyze("List fruits etc");
        assert_eq!(analysis.count(Category::Clarity), 2);
        assert_eq!(analysis.score.clarity, 60);
    }

    #[test]
    fn three_correctness_hits_score_fifty_five() {
        let analysis = analyze("One! Two? Three! four");
        assert_eq!(analysis.count(Category::Correctness), 3);
        assert_eq!(analysis.score.correctness, 55);
    }

    #[test]
    fn scores_floor_at_zero() {
        let analysis = analyze("a! b! c! d! e! f! g! h! i");
        assert_eq!(analysis.count(Category::Correctness), 8);
        assert_eq!(analysis.score.correctness, 0);
    }

    #[test]
    fn absolute_language_scenario() {
        let analysis = analyze("You must always respond in English and never use slang.");
        let strong: Vec<_> = analysis
            .suggestions
            .iter()
            .filter(|s| s.id == "strong-language")
            .collect();
        assert_eq!(strong.len(), 1);
        assert_eq!(strong[0].category, Category::Delivery);
    }

    #[test]
    fn score_matches_suggestion_counts() {
        let text = "you are a bot. Help your user etc. Always answer! ok";
        let analysis = analyze(text);
        for category in Category::ALL {
            let expected = 100usize.saturating_sub(analysis.count(category) * category.penalty());
            assert_eq!(usize::from(analysis.score.get(category)), expected);
        }
    }

    #[test]
    fn astral_characters_count_twice_toward_length() {
        // 26 emoji + " hello" is 32 chars but 58 UTF-16 units.
        let analysis = analyze(&format!("{} hello", "\u{1F600}".repeat(26)));
        assert!(analysis.get("add-examples").is_some());
        assert_eq!(analysis.score.engagement, 85);
    }

    #[test]
    fn fixes_target_substrings_of_the_input() {
        let text = "you are a travel agent. Plan your trips! Keep it short";
        for suggestion in analyze(text).suggestions {
            if let Some(original) = &suggestion.original_text {
                assert!(text.contains(original.as_str()), "{}", suggestion.id);
            }
            if suggestion.suggested_text.is_some() {
                assert!(suggestion.original_text.is_some());
            }
        }
    }
}
