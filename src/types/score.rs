//! Score structures for the lexical scorer

use serde::{Deserialize, Serialize};

/// Raw match counts behind a text score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Whole-word hits from the positive vocabulary (weight: 6, cap 36)
    pub positive_matches: usize,
    /// Whole-word hits from the negative vocabulary (weight: 7, cap 28)
    pub negative_matches: usize,
    /// Recurring-schedule phrases (weight: 7, cap 21)
    pub schedule_matches: usize,
    /// Final clamped text score: 0-60
    pub text_score: u32,
}

/// The two halves of a probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Pure function of the text: 0-60
    pub text_score: u32,
    /// Pure function of the fingerprint seed: 0-40
    pub random_score: u32,
}

impl ScoreComponents {
    /// Sum clamped to 0-100
    pub fn probability(&self) -> u32 {
        (self.text_score + self.random_score).min(crate::PROBABILITY_MAX)
    }
}
