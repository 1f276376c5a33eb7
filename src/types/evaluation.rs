//! Evaluation results and their output envelope

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{ScoreComponents, Tier};

/// Everything a single evaluation produces
///
/// Contains no wall-clock data: evaluating the same text twice yields
/// byte-identical values (and an identical [`EvaluationResult::digest`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Final probability: 0-100
    pub probability: u32,
    /// Text and random halves of the probability
    pub components: ScoreComponents,
    /// Band the probability falls in
    pub tier: Tier,
    /// Ranked themes, always three
    pub themes: [String; 3],
    /// Tier advice, then a seeded pick from the advice pool
    pub advice: [String; 2],
    /// Three space-joined sentences
    pub narrative: String,
}

impl EvaluationResult {
    /// SHA-256 over the JSON encoding, hex encoded
    pub fn digest(&self) -> String {
        let bytes = serde_json::to_vec(self).expect("EvaluationResult always encodes to JSON");
        let hash: [u8; 32] = Sha256::digest(&bytes).into();
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Capitalised themes, as shown in tags
    pub fn theme_tags(&self) -> Vec<String> {
        self.themes.iter().map(|t| crate::core::narrative::capitalize(t)).collect()
    }

    /// One-line summary for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} {}% | tier={} | themes={}",
            self.tier.emoji(),
            self.probability,
            self.tier,
            self.theme_tags().join(", ")
        );
        self.tier.paint(&line).bold().to_string()
    }

    /// One-line summary without colors
    pub fn to_parseable_string(&self) -> String {
        format!(
            "probability={} | tier={} | text={} | random={} | themes={}",
            self.probability,
            self.tier,
            self.components.text_score,
            self.components.random_score,
            self.themes.join(",")
        )
    }
}

/// Result plus the metadata a caller would persist or display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingOutput {
    /// When the reading was produced (not part of the digest)
    pub evaluated_at: DateTime<Utc>,
    /// Digest of `result`
    pub digest: String,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

impl ReadingOutput {
    pub fn new(result: EvaluationResult) -> Self {
        Self {
            evaluated_at: Utc::now(),
            digest: result.digest(),
            result,
        }
    }
}
