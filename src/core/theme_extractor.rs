//! Theme extractor: frequency-ranked keywords, padded to exactly three

use std::collections::HashMap;

use tracing::debug;

use crate::core::vocabulary::{is_stop_word, FALLBACK_KEYWORDS, RE_THEME_TOKEN};
use crate::core::SeededRandom;
use crate::{THEME_COUNT, THEME_PAD_STRIDE};

/// Suffix appended to a fallback keyword that is already in the list
pub const FALLBACK_DUPLICATE_SUFFIX: &str = "-energy";

#[derive(Debug, Default, Clone, Copy)]
pub struct ThemeExtractor;

impl ThemeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Organic themes only: every non-stop token ranked by frequency desc,
    /// then alphabetically
    pub fn rank(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for token in RE_THEME_TOKEN.find_iter(&lower).map(|m| m.as_str()) {
            if !is_stop_word(token) {
                *frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.into_iter().map(|(token, _)| token.to_string()).collect()
    }

    /// Top three themes. Short lists are padded from the fallback pool, slot
    /// `i` drawing from `seed + i * 31`.
    pub fn extract(&self, text: &str, seed: u32) -> [String; 3] {
        let mut themes = self.rank(text);
        themes.truncate(THEME_COUNT);

        let organic = themes.len();
        while themes.len() < THEME_COUNT {
            let slot = themes.len() as u32;
            let pick_seed = seed.wrapping_add(slot.wrapping_mul(THEME_PAD_STRIDE));
            let fallback = FALLBACK_KEYWORDS[SeededRandom::index(pick_seed, FALLBACK_KEYWORDS.len())];

            if themes.iter().any(|t| t == fallback) {
                themes.push(format!("{}{}", fallback, FALLBACK_DUPLICATE_SUFFIX));
            } else {
                themes.push(fallback.to_string());
            }
        }
        debug!(organic, padded = THEME_COUNT - organic, ?themes, "themes extracted");

        let mut iter = themes.into_iter();
        [
            iter.next().unwrap_or_default(),
            iter.next().unwrap_or_default(),
            iter.next().unwrap_or_default(),
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================
