//! Narrative composer: tiered sentences and seeded advice

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SeededRandom;
use crate::types::Tier;
use crate::ADVICE_SEED_OFFSET;

/// Used when no themes are supplied. The pipeline always supplies three, so
/// only direct callers of [`NarrativeComposer::compose`] can reach this.
pub const DEFAULT_THEMES: [&str; 3] = ["Persistence", "Balance", "Openness"];

pub const CLOSING_SENTENCE: &str =
    "Approach each interpretation as a clue, not a command, and stay playful with the process.";

/// Stand-ins for a missing primary / secondary theme in advice
pub const DEFAULT_PRIMARY_THEME: &str = "focus";
pub const DEFAULT_SECONDARY_THEME: &str = "balance";

/// Size of the seeded advice pool
pub const ADVICE_POOL_SIZE: usize = 6;

/// Narrative paragraph plus two advice strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub narrative: String,
    pub advice: [String; 2],
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NarrativeComposer;

impl NarrativeComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose<S: AsRef<str>>(
        &self,
        probability: u32,
        wish_text: &str,
        themes: &[S],
        seed: u32,
    ) -> Composition {
        let tier = Tier::from_probability(probability);
        let narrative = narrative(tier, wish_text, themes);
        let advice = [tier_advice(tier, themes), pool_advice(themes, seed)];
        debug!(probability, %tier, "narrative composed");
        Composition { narrative, advice }
    }
}

/// Mood sentence for a tier
pub fn mood_sentence(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "Momentum is strong—stay focused and celebrate each stride forward.",
        Tier::Steady => "A steady path is forming; refine your plan and keep acting with intention.",
        Tier::Warming => {
            "The odds are warming up; consistent effort can tip the balance in your favor."
        }
        Tier::Nudge => {
            "Treat this reading as a friendly nudge to recommit and set a clear first step."
        }
    }
}

fn narrative<S: AsRef<str>>(tier: Tier, wish_text: &str, themes: &[S]) -> String {
    let opening = format!("Your wish \"{}\" draws on {}.", wish_text, format_theme_list(themes));
    [opening.as_str(), mood_sentence(tier), CLOSING_SENTENCE].join(" ")
}

fn tier_advice<S: AsRef<str>>(tier: Tier, themes: &[S]) -> String {
    let primary = primary_theme(themes);
    match tier {
        Tier::Strong => format!("Put your {} into action by scheduling a milestone this week.", primary),
        Tier::Steady => format!("Channel your {} by outlining the next two concrete steps.", primary),
        Tier::Warming => format!("Anchor your progress in {} with one repeatable habit.", primary),
        Tier::Nudge => format!(
            "Jump-start momentum by pairing {} with one simple action today.",
            primary
        ),
    }
}

/// Entry `floor(next(seed + 17) * 6)` of the advice pool
fn pool_advice<S: AsRef<str>>(themes: &[S], seed: u32) -> String {
    let primary = primary_theme(themes);
    let secondary = themes
        .get(1)
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SECONDARY_THEME);

    let pick_seed = seed.wrapping_add(ADVICE_SEED_OFFSET);
    match SeededRandom::index(pick_seed, ADVICE_POOL_SIZE) {
        0 => format!("Share your intention with a trusted friend to keep {} alive.", secondary),
        1 => format!("Record a quick reflection after each effort so {} keeps evolving.", primary),
        2 => format!("Mark a recurring reminder—consistency fuels {}.", primary),
        3 => format!("Celebrate micro-wins to reinforce {}.", secondary),
        4 => "Translate each image insight into a five-minute action.".to_string(),
        _ => format!("Blend {} with self-care so energy stays high.", primary),
    }
}

fn primary_theme<S: AsRef<str>>(themes: &[S]) -> &str {
    themes
        .first()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_PRIMARY_THEME)
}

/// Upper-case the first character, leave the rest alone
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "A", "A and B", "A, B, and C" over capitalised themes
pub fn format_theme_list<S: AsRef<str>>(themes: &[S]) -> String {
    let mut names: Vec<String> = themes.iter().map(|t| capitalize(t.as_ref())).collect();
    if names.is_empty() {
        names = DEFAULT_THEMES.iter().map(|t| t.to_string()).collect();
    }

    match names.len() {
        1 => names.remove(0),
        2 => format!("{} and {}", names[0], names[1]),
        n => format!("{}, and {}", names[..n - 1].join(", "), names[n - 1]),
    }
}

// =============================================================================
// TESTS
// =============================================================================
