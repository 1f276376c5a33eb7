//! Core types for Wish Oracle

mod tier;
mod score;
mod evaluation;
mod reading;

pub use tier::Tier;
pub use score::{ScoreBreakdown, ScoreComponents};
pub use evaluation::{EvaluationResult, ReadingOutput};
pub use reading::{Reading, ReadingError};
