//! Keyword picker: the two search keywords behind a wish's images
//!
//! Separate from theme padding on purpose: it uses its own seed offsets
//! (`seed`, `seed + 13`) and never produces "-energy" variants.

use crate::core::vocabulary::{is_stop_word, FALLBACK_KEYWORDS, RE_KEYWORD_TOKEN};
use crate::core::{Hasher, SeededRandom};
use crate::{IMAGE_COUNT, KEYWORD_SEED_OFFSET};

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordPicker;

impl KeywordPicker {
    pub fn new() -> Self {
        Self
    }

    /// Two keywords for a wish
    ///
    /// Unique non-stop tokens longer than two letters, in order of first
    /// appearance. Missing ones come from the fallback pool.
    pub fn choose(&self, wish: &str) -> Vec<String> {
        let lower = wish.to_lowercase();
        let mut unique: Vec<&str> = Vec::new();
        for token in RE_KEYWORD_TOKEN.find_iter(&lower).map(|m| m.as_str()) {
            if token.len() > 2 && !is_stop_word(token) && !unique.contains(&token) {
                unique.push(token);
            }
        }

        match unique.as_slice() {
            [] => self.pick_fallback(Hasher::hash(wish)).to_vec(),
            [only] => {
                let [fallback, _] = self.pick_fallback(Hasher::hash(only));
                vec![only.to_string(), fallback]
            }
            [first, second, ..] => vec![first.to_string(), second.to_string()],
        }
    }

    /// Two distinct fallback keywords from `seed` and `seed + 13`
    pub fn pick_fallback(&self, seed: u32) -> [String; 2] {
        let len = FALLBACK_KEYWORDS.len();
        let first = SeededRandom::index(seed, len);
        let mut second = SeededRandom::index(seed.wrapping_add(KEYWORD_SEED_OFFSET), len);
        if second == first {
            second = (second + 1) % len;
        }
        [FALLBACK_KEYWORDS[first].to_string(), FALLBACK_KEYWORDS[second].to_string()]
    }

    /// One keyword per image, cycling through [`KeywordPicker::choose`]
    pub fn image_keywords(&self, wish: &str) -> Vec<String> {
        let chosen = self.choose(wish);
        (0..IMAGE_COUNT).map(|i| chosen[i % chosen.len()].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_organic_keywords() {
        let picker = KeywordPicker::new();
        assert_eq!(picker.choose("Learn piano"), vec!["learn", "piano"]);
        assert_eq!(picker.choose("run a marathon every week"), vec!["run", "marathon"]);
    }

    #[test]
    fn test_single_keyword_gets_fallback() {
        assert_eq!(KeywordPicker::new().choose("swim"), vec!["swim", "water"]);
    }

    #[test]
    fn test_no_keywords_uses_fallback_pair() {
        let picker = KeywordPicker::new();
        assert_eq!(picker.choose("the and"), vec!["sky", "water"]);
        assert_eq!(picker.choose("!!!"), vec!["texture", "light"]);
    }

    #[test]
    fn test_fallback_pair_is_distinct() {
        let picker = KeywordPicker::new();
        for seed in (0..u32::MAX).step_by(104_729_123) {
            let [a, b] = picker.pick_fallback(seed);
            assert_ne!(a, b, "seed {}", seed);
        }
    }

    #[test]
    fn test_image_keywords_cycle() {
        let keywords = KeywordPicker::new().image_keywords("learn piano");
        assert_eq!(keywords, vec!["learn", "piano", "learn", "piano"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        assert_eq!(KeywordPicker::new().choose("sing sing sing loud"), vec!["sing", "loud"]);
    }
}
