//! Reading input: a wish plus one interpretation per image

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{IMAGE_COUNT, INTERPRETATION_MAX_CHARS, WISH_MAX_CHARS, WISH_MIN_CHARS};

/// Why a reading was rejected before evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("Wish must be between {min} and {max} characters (got {len}).")]
    WishLength { len: usize, min: usize, max: usize },

    #[error("Expected {expected} interpretations, got {got}.")]
    InterpretationCount { expected: usize, got: usize },

    #[error("Please interpret image {} before submitting.", .index + 1)]
    EmptyInterpretation { index: usize },

    #[error("Interpretation for image {} is {len} characters (max {max}).", .index + 1)]
    InterpretationTooLong { index: usize, len: usize, max: usize },
}

/// A validated wish with its image interpretations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    wish: String,
    interpretations: Vec<String>,
}

impl Reading {
    /// Validate and build a reading. The wish is trimmed; interpretations are
    /// kept as written. Lengths count UTF-16 units, so an emoji counts as two.
    pub fn new<S: AsRef<str>>(wish: &str, interpretations: &[S]) -> Result<Self, ReadingError> {
        let wish = wish.trim();
        let len = wish.encode_utf16().count();
        if !(WISH_MIN_CHARS..=WISH_MAX_CHARS).contains(&len) {
            return Err(ReadingError::WishLength {
                len,
                min: WISH_MIN_CHARS,
                max: WISH_MAX_CHARS,
            });
        }

        if interpretations.len() != IMAGE_COUNT {
            return Err(ReadingError::InterpretationCount {
                expected: IMAGE_COUNT,
                got: interpretations.len(),
            });
        }

        for (index, text) in interpretations.iter().enumerate() {
            let text = text.as_ref();
            if text.trim().is_empty() {
                return Err(ReadingError::EmptyInterpretation { index });
            }
            let len = text.encode_utf16().count();
            if len > INTERPRETATION_MAX_CHARS {
                return Err(ReadingError::InterpretationTooLong {
                    index,
                    len,
                    max: INTERPRETATION_MAX_CHARS,
                });
            }
        }

        Ok(Self {
            wish: wish.to_string(),
            interpretations: interpretations.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    pub fn wish(&self) -> &str {
        &self.wish
    }

    pub fn interpretations(&self) -> &[String] {
        &self.interpretations
    }

    /// Wish, then each interpretation, space-joined
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.wish, self.interpretations.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four(text: &str) -> Vec<String> {
        vec![text.to_string(); IMAGE_COUNT]
    }

    #[test]
    fn test_valid_reading() {
        let reading = Reading::new("  learn piano  ", &four("a quiet lake")).unwrap();
        assert_eq!(reading.wish(), "learn piano");
        assert_eq!(reading.interpretations().len(), IMAGE_COUNT);
    }

    #[test]
    fn test_wish_too_short() {
        let err = Reading::new("hi", &four("x")).unwrap_err();
        assert_eq!(err, ReadingError::WishLength { len: 2, min: 3, max: 140 });
    }

    #[test]
    fn test_wish_exactly_max_is_accepted() {
        let wish = "w".repeat(WISH_MAX_CHARS);
        assert!(Reading::new(&wish, &four("x")).is_ok());
        let wish = "w".repeat(WISH_MAX_CHARS + 1);
        assert!(matches!(
            Reading::new(&wish, &four("x")),
            Err(ReadingError::WishLength { len: 141, .. })
        ));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let wish = "🌟".repeat(71);
        assert!(matches!(
            Reading::new(&wish, &four("x")),
            Err(ReadingError::WishLength { len: 142, .. })
        ));
        assert!(Reading::new(&"🌟".repeat(70), &four("x")).is_ok());

        let mut texts = four("a tree");
        texts[1] = "é".repeat(INTERPRETATION_MAX_CHARS);
        assert!(Reading::new("run a marathon", &texts).is_ok());
        texts[1] = "✨🌟".repeat(67);
        assert!(matches!(
            Reading::new("run a marathon", &texts),
            Err(ReadingError::InterpretationTooLong { index: 1, len: 201, max: 200 })
        ));
    }

    #[test]
    fn test_blank_interpretation_rejected() {
        let mut texts = four("a tree");
        texts[2] = "   ".to_string();
        let err = Reading::new("run a marathon", &texts).unwrap_err();
        assert_eq!(err, ReadingError::EmptyInterpretation { index: 2 });
        assert_eq!(err.to_string(), "Please interpret image 3 before submitting.");
    }

    #[test]
    fn test_long_interpretation_rejected() {
        let mut texts = four("a tree");
        texts[0] = "y".repeat(INTERPRETATION_MAX_CHARS + 1);
        assert!(matches!(
            Reading::new("run a marathon", &texts),
            Err(ReadingError::InterpretationTooLong { index: 0, len: 201, max: 200 })
        ));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let err = Reading::new("run a marathon", &["one", "two"]).unwrap_err();
        assert_eq!(err, ReadingError::InterpretationCount { expected: 4, got: 2 });
    }

    #[test]
    fn test_combined_text() {
        let reading = Reading::new("read more", &["sun", "moon", "tide", "stone"]).unwrap();
        assert_eq!(reading.combined_text(), "read more sun moon tide stone");
    }
}
