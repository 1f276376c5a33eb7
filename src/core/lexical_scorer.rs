//! Lexical scorer: bounded text score from vocabulary and schedule matches
//!
//! score = 20 + min(6·positive, 36) − min(7·negative, 28) + min(7·schedule, 21),
//! clamped to 0..=60. Each list is counted on its own; a word present in two
//! lists is scored by both.

use regex::Regex;
use tracing::debug;

use crate::core::vocabulary::{RE_NEGATIVE, RE_POSITIVE, RE_SCHEDULE};
use crate::types::ScoreBreakdown;
use crate::{
    BASE_SCORE, NEGATIVE_CAP, NEGATIVE_WEIGHT, POSITIVE_CAP, POSITIVE_WEIGHT, SCHEDULE_CAP,
    SCHEDULE_WEIGHT, TEXT_SCORE_MAX,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score text, returning the match counts behind the score
    pub fn breakdown(&self, text: &str) -> ScoreBreakdown {
        let lower = text.to_lowercase();

        let positive_matches = count_all(&RE_POSITIVE, &lower);
        let negative_matches = count_all(&RE_NEGATIVE, &lower);
        let schedule_matches = RE_SCHEDULE.find_iter(&lower).count();

        let mut score = BASE_SCORE;
        score += weighted(positive_matches, POSITIVE_WEIGHT, POSITIVE_CAP);
        score -= weighted(negative_matches, NEGATIVE_WEIGHT, NEGATIVE_CAP);
        score += weighted(schedule_matches, SCHEDULE_WEIGHT, SCHEDULE_CAP);

        let text_score = score.clamp(0, TEXT_SCORE_MAX as i32) as u32;
        debug!(
            positive_matches,
            negative_matches, schedule_matches, text_score, "lexical score"
        );

        ScoreBreakdown {
            positive_matches,
            negative_matches,
            schedule_matches,
            text_score,
        }
    }

    /// Text score only: 0-60
    pub fn score(&self, text: &str) -> u32 {
        self.breakdown(text).text_score
    }
}

/// Total non-overlapping matches across a vocabulary
fn count_all(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// count × weight, capped
fn weighted(count: usize, weight: i32, cap: i32) -> i32 {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    count.saturating_mul(weight).min(cap)
}

// =============================================================================
// TESTS
// =============================================================================
