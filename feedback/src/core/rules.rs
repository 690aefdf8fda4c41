//! Independent prompt checks.
//!
//! Each rule is a pure function of the full text. The analyzer runs them in
//! [`RULES`] order and concatenates their output; no state is shared between
//! rules. Substring checks are case-sensitive unless a rule says otherwise.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::{Category, FeedbackSuggestion, Severity};

/// A named check tagged with the category it penalizes.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub category: Category,
    pub check: fn(&str) -> Vec<FeedbackSuggestion>,
}

/// The pipeline, in output order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "passive-voice",
        category: Category::Correctness,
        check: passive_voice,
    },
    Rule {
        id: "punctuation",
        category: Category::Correctness,
        check: punctuation,
    },
    Rule {
        id: "too-short",
        category: Category::Clarity,
        check: too_short,
    },
    Rule {
        id: "vague-language",
        category: Category::Clarity,
        check: vague_language,
    },
    Rule {
        id: "add-examples",
        category: Category::Engagement,
        check: add_examples,
    },
    Rule {
        id: "add-structure",
        category: Category::Engagement,
        check: add_structure,
    },
    Rule {
        id: "too-long",
        category: Category::Delivery,
        check: too_long,
    },
    Rule {
        id: "strong-language",
        category: Category::Delivery,
        check: strong_language,
    },
];

const MIN_WORDS: usize = 10;
const MAX_WORDS: usize = 500;
const EXAMPLES_MIN_CHARS: usize = 50;
const STRUCTURE_MIN_CHARS: usize = 100;

static ROLE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)you are a ([^.]+)").expect("role clause regex"));
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence break regex"));

/// Rewrite the first `you are a ...` clause as an instruction.
///
/// Only fires when the text contains both `your` and `you are` verbatim. The
/// clause itself is matched case-insensitively, but the rewrite replaces the
/// lowercase `you are` only, so a capitalized match yields an unchanged fix.
fn passive_voice(text: &str) -> Vec<FeedbackSuggestion> {
    if !(text.contains("your") && text.contains("you are")) {
        return Vec::new();
    }
    let Some(clause) = ROLE_CLAUSE.find(text) else {
        return Vec::new();
    };
    let original = clause.as_str();
    let suggested = original.replacen("you are", "You must act as", 1);
    vec![
        FeedbackSuggestion::new(
            "passive-voice-1",
            Category::Correctness,
            Severity::Suggestion,
            "Rewrite in active voice",
            "Use active voice for clearer, more direct instructions",
        )
        .with_fix(original, suggested),
    ]
}

/// Flag every non-final sentence segment that does not end with a period.
///
/// Segments come from splitting on runs of `.`, `!` and `?`, so the trailing
/// period check never passes for a non-final segment. Ids carry the segment
/// index, not its content.
fn punctuation(text: &str) -> Vec<FeedbackSuggestion> {
    let segments: Vec<&str> = SENTENCE_BREAK.split(text).collect();
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .filter_map(|(idx, segment)| {
            let sentence = segment.trim_matches(is_js_whitespace);
            if sentence.is_empty() || sentence.ends_with('.') || idx >= last {
                return None;
            }
            Some(
                FeedbackSuggestion::new(
                    format!("punctuation-{idx}"),
                    Category::Correctness,
                    Severity::Error,
                    "Punctuation problem",
                    "Missing period at end of sentence",
                )
                .targeting(sentence),
            )
        })
        .collect()
}

fn too_short(text: &str) -> Vec<FeedbackSuggestion> {
    if text.is_empty() || space_separated_count(text) >= MIN_WORDS {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "too-short",
        Category::Clarity,
        Severity::Warning,
        "Instructions too brief",
        "Add more context and specific requirements for better results",
    )]
}

fn vague_language(text: &str) -> Vec<FeedbackSuggestion> {
    if !(text.contains("etc") || text.contains("...")) {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "vague-language",
        Category::Clarity,
        Severity::Warning,
        "Avoid vague language",
        "Be specific instead of using \"etc\" or \"...\" - list out exact requirements",
    )]
}

/// Case-insensitive.
fn add_examples(text: &str) -> Vec<FeedbackSuggestion> {
    let lower = text.to_lowercase();
    let has_examples = lower.contains("example") || lower.contains("for instance");
    if has_examples || utf16_len(text) <= EXAMPLES_MIN_CHARS {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "add-examples",
        Category::Engagement,
        Severity::Suggestion,
        "Include examples",
        "Add concrete examples to help the agent understand expected outputs",
    )]
}

/// Case-insensitive.
fn add_structure(text: &str) -> Vec<FeedbackSuggestion> {
    let lower = text.to_lowercase();
    if lower.contains("step") || lower.contains("first") || utf16_len(text) <= STRUCTURE_MIN_CHARS {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "add-structure",
        Category::Engagement,
        Severity::Suggestion,
        "Add step-by-step structure",
        "Break down instructions into numbered steps for clarity",
    )]
}

fn too_long(text: &str) -> Vec<FeedbackSuggestion> {
    let words = word_count(text);
    if words <= MAX_WORDS {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "too-long",
        Category::Delivery,
        Severity::Warning,
        "Instructions too lengthy",
        format!("Consider condensing to focus on key requirements (currently {words} words)"),
    )]
}

/// One suggestion no matter how many absolute words appear.
fn strong_language(text: &str) -> Vec<FeedbackSuggestion> {
    if !["never", "always", "must"]
        .iter()
        .any(|word| text.contains(word))
    {
        return Vec::new();
    }
    vec![FeedbackSuggestion::new(
        "strong-language",
        Category::Delivery,
        Severity::Suggestion,
        "Consider softening absolute language",
        "Words like \"never\" and \"always\" can be overly restrictive - use when truly necessary",
    )]
}

/// Number of pieces when splitting on single spaces (empty pieces included).
pub fn space_separated_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Whitespace-delimited tokens, empty tokens discarded.
pub fn word_count(text: &str) -> usize {
    text.split(is_js_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}

/// Length in UTF-16 code units. Characters outside the BMP count twice.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// The ECMAScript whitespace set used by `\s` and `trim`.
///
/// Differs from `char::is_whitespace`: U+FEFF is included, U+0085 is not.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
