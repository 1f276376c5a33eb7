//! Probability tiers

use colored::{Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use crate::{TIER_STEADY_MIN, TIER_STRONG_MIN, TIER_WARMING_MIN};

/// The four probability bands that select narrative and advice templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// probability >= 80
    Strong,
    /// probability >= 60
    Steady,
    /// probability >= 40
    Warming,
    /// everything below 40
    Nudge,
}

impl Tier {
    /// Classify a probability; thresholds are inclusive lower bounds
    pub fn from_probability(probability: u32) -> Self {
        if probability >= TIER_STRONG_MIN {
            Tier::Strong
        } else if probability >= TIER_STEADY_MIN {
            Tier::Steady
        } else if probability >= TIER_WARMING_MIN {
            Tier::Warming
        } else {
            Tier::Nudge
        }
    }

    /// Terminal color for this tier
    pub fn color(&self) -> Color {
        match self {
            Tier::Strong => Color::Green,
            Tier::Steady => Color::Cyan,
            Tier::Warming => Color::Yellow,
            Tier::Nudge => Color::BrightBlack,
        }
    }

    /// Paint text in this tier's color
    pub fn paint(&self, text: &str) -> ColoredString {
        text.color(self.color())
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tier::Strong => "🌟",
            Tier::Steady => "🧭",
            Tier::Warming => "🔥",
            Tier::Nudge => "🌱",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Strong => "STRONG",
            Tier::Steady => "STEADY",
            Tier::Warming => "WARMING",
            Tier::Nudge => "NUDGE",
        };
        write!(f, "{}", name)
    }
}
