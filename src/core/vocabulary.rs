//! Fixed vocabularies and compiled patterns
//!
//! Process-wide and immutable. Patterns are compiled once on first use.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// Words that raise the text score (weight: 6)
pub const POSITIVE_WORDS: [&str; 15] = [
    "persistence",
    "patience",
    "plan",
    "action",
    "learn",
    "health",
    "friend",
    "communicate",
    "train",
    "practice",
    "reflect",
    "sleep",
    "run",
    "read",
    "record",
];

/// Words and phrases that lower the text score (weight: 7)
pub const NEGATIVE_WORDS: [&str; 8] = [
    "worry",
    "anxious",
    "delay",
    "hesitate",
    "give up",
    "hard",
    "fail",
    "impossible",
];

/// Pool used to pad themes and to pick image keywords
pub const FALLBACK_KEYWORDS: [&str; 7] = [
    "abstract", "texture", "light", "pattern", "nature", "sky", "water",
];

/// Structural words and domain noise ignored by theme/keyword extraction
pub const STOP_WORDS: [&str; 29] = [
    "the", "and", "with", "from", "that", "this", "have", "your", "about", "into", "make",
    "gets", "getting", "want", "wish", "need", "more", "less", "like", "just", "also",
    "take", "give", "new", "good", "better", "friend", "friends", "job",
];

lazy_static! {
    pub static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();

    // =========================================================================
    // One whole-word pattern per vocabulary entry, matched on lowercased text.
    // Word boundaries are ASCII: "é" next to "plan" still counts as a break.
    // =========================================================================
    pub static ref RE_POSITIVE: Vec<Regex> = whole_word_patterns(&POSITIVE_WORDS);
    pub static ref RE_NEGATIVE: Vec<Regex> = whole_word_patterns(&NEGATIVE_WORDS);

    // =========================================================================
    // Recurring schedule: "every day/week/month", "<n> minutes/hours/times/..."
    // =========================================================================
    pub static ref RE_SCHEDULE: Regex = Regex::new(
        r"(?i)(?-u:\b)(every\s+(day|week|month)|[0-9]+\s?(minutes?|minute|hours?|hour|times?|days?|weeks?|months?))(?-u:\b)"
    ).unwrap();

    /// Theme tokens: ASCII letter runs of length 3+
    pub static ref RE_THEME_TOKEN: Regex = Regex::new(r"[a-z]{3,}").unwrap();

    /// Keyword tokens: any ASCII letter run
    pub static ref RE_KEYWORD_TOKEN: Regex = Regex::new(r"[a-z]+").unwrap();
}

fn whole_word_patterns(words: &[&str]) -> Vec<Regex> {
    words
        .iter()
        .map(|word| Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(word))).unwrap())
        .collect()
}

/// True if the token is a stop word
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}
