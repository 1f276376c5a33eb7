//! Wish Oracle: deterministic reading engine
//!
//! text → hasher → seed → lexical score + themes → narrative and advice

pub mod core;
pub mod types;

pub use crate::core::evaluate;

// =============================================================================
// LEXICAL SCORE [C]
// =============================================================================

/// Every text starts from this score before matches are counted
pub const BASE_SCORE: i32 = 20;

/// Points per positive vocabulary match
pub const POSITIVE_WEIGHT: i32 = 6;
/// Positive contribution never exceeds this
pub const POSITIVE_CAP: i32 = 36;

/// Points removed per negative vocabulary match
pub const NEGATIVE_WEIGHT: i32 = 7;
/// Negative deduction never exceeds this
pub const NEGATIVE_CAP: i32 = 28;

/// Points per recurring-schedule phrase ("every day", "3 times")
pub const SCHEDULE_WEIGHT: i32 = 7;
/// Schedule contribution never exceeds this
pub const SCHEDULE_CAP: i32 = 21;

/// Text score upper bound (lower bound is 0)
pub const TEXT_SCORE_MAX: u32 = 60;

/// Random component is round(next(seed) * RANDOM_SCORE_MAX)
pub const RANDOM_SCORE_MAX: u32 = 40;

/// Probability upper bound (lower bound is 0)
pub const PROBABILITY_MAX: u32 = 100;

// =============================================================================
// TIERS [C]
// =============================================================================

/// Inclusive lower bound of the Strong tier
pub const TIER_STRONG_MIN: u32 = 80;
/// Inclusive lower bound of the Steady tier
pub const TIER_STEADY_MIN: u32 = 60;
/// Inclusive lower bound of the Warming tier
pub const TIER_WARMING_MIN: u32 = 40;

// =============================================================================
// SEED OFFSETS [C] - test vectors depend on these bit-for-bit
// =============================================================================

/// Theme padding slot i draws from seed + i * THEME_PAD_STRIDE
pub const THEME_PAD_STRIDE: u32 = 31;
/// Advice pool pick draws from seed + ADVICE_SEED_OFFSET
pub const ADVICE_SEED_OFFSET: u32 = 17;
/// Second fallback image keyword draws from seed + KEYWORD_SEED_OFFSET
pub const KEYWORD_SEED_OFFSET: u32 = 13;

// =============================================================================
// READING LIMITS [C]
// =============================================================================

/// Number of images (and interpretations) per reading
pub const IMAGE_COUNT: usize = 4;
/// Themes per reading
pub const THEME_COUNT: usize = 3;
/// Minimum wish length in characters
pub const WISH_MIN_CHARS: usize = 3;
/// Maximum wish length in characters
pub const WISH_MAX_CHARS: usize = 140;
/// Maximum interpretation length in characters
pub const INTERPRETATION_MAX_CHARS: usize = 200;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
