//! Evaluation pipeline: text in, probability/themes/advice/narrative out
//!
//! seed = hash(text); text = score(text); random = round(next(seed) · 40);
//! probability = clamp(text + random, 0, 100). Nothing here reads the clock.

use tracing::debug;

use crate::core::{Hasher, LexicalScorer, NarrativeComposer, SeededRandom, ThemeExtractor};
use crate::types::{EvaluationResult, Reading, ScoreComponents, Tier};
use crate::RANDOM_SCORE_MAX;

#[derive(Debug, Default, Clone, Copy)]
pub struct EvaluationPipeline {
    scorer: LexicalScorer,
    extractor: ThemeExtractor,
    composer: NarrativeComposer,
}

impl EvaluationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate text, quoting the text itself as the wish in the narrative
    pub fn evaluate(&self, text: &str) -> EvaluationResult {
        self.evaluate_with_wish(text, text)
    }

    /// Evaluate combined text while the narrative quotes `wish`
    pub fn evaluate_with_wish(&self, text: &str, wish: &str) -> EvaluationResult {
        let seed = Hasher::hash(text);
        let components = ScoreComponents {
            text_score: self.scorer.score(text),
            random_score: random_score(seed),
        };
        let probability = components.probability();
        let themes = self.extractor.extract(text, seed);
        let composition = self.composer.compose(probability, wish, &themes, seed);

        debug!(
            seed,
            text_score = components.text_score,
            random_score = components.random_score,
            probability,
            "evaluation complete"
        );

        EvaluationResult {
            probability,
            components,
            tier: Tier::from_probability(probability),
            themes,
            advice: composition.advice,
            narrative: composition.narrative,
        }
    }

    /// Evaluate a validated reading: combined text scored, wish quoted
    pub fn evaluate_reading(&self, reading: &Reading) -> EvaluationResult {
        self.evaluate_with_wish(&reading.combined_text(), reading.wish())
    }
}

/// round(next(seed) * 40): 0-40
pub fn random_score(seed: u32) -> u32 {
    (SeededRandom::next(seed) * f64::from(RANDOM_SCORE_MAX)).round() as u32
}

/// Evaluate text with a default pipeline
pub fn evaluate(text: &str) -> EvaluationResult {
    EvaluationPipeline::new().evaluate(text)
}

// =============================================================================
// TESTS
// =============================================================================
