//! Core modules for Wish Oracle

pub mod hasher;
pub mod seeded_random;
pub mod vocabulary;
pub mod lexical_scorer;
pub mod theme_extractor;
pub mod narrative;
pub mod keywords;
pub mod pipeline;
pub mod api;

pub use hasher::Hasher;
pub use seeded_random::SeededRandom;
pub use lexical_scorer::LexicalScorer;
pub use theme_extractor::ThemeExtractor;
pub use narrative::{Composition, NarrativeComposer};
pub use keywords::KeywordPicker;
pub use pipeline::{evaluate, random_score, EvaluationPipeline};
pub use api::{create_router, run_server};
