//! Core type definitions for the Simon engine.
//!
//! All types are small value types; everything that crosses the persistence
//! boundary is serde-serializable with lowercase wire names.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// One of the four game signals, rendered as colors on a classic Simon board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Top-left pad.
    Green,
    /// Top-right pad.
    Red,
    /// Bottom-left pad.
    Yellow,
    /// Bottom-right pad.
    Blue,
}

impl Signal {
    /// All four signals in board order.
    pub const ALL: [Self; 4] = [Self::Green, Self::Red, Self::Yellow, Self::Blue];

    /// Reference tone frequency for audio sinks, in hertz.
    ///
    /// Green/red/yellow/blue map to C4, E4, G4, C5 — a major chord, so any
    /// sub-sequence sounds consonant.
    #[must_use]
    pub fn tone_hz(self) -> f32 {
        match self {
            Self::Green => 261.63,
            Self::Red => 329.63,
            Self::Yellow => 392.00,
            Self::Blue => 523.25,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Game difficulty. Controls playback pacing and score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 1000ms between signals, ×1 score.
    Easy,
    /// 700ms between signals, ×2 score.
    Medium,
    /// 400ms between signals, ×3 score.
    Hard,
}

/// Fixed per-difficulty settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Time from the start of one playback pulse to the start of the next.
    pub inter_signal_delay: Duration,
    /// Points awarded per completed round.
    pub score_multiplier: u32,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The fixed profile for this difficulty.
    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                inter_signal_delay: Duration::from_millis(1000),
                score_multiplier: 1,
            },
            Self::Medium => DifficultyProfile {
                inter_signal_delay: Duration::from_millis(700),
                score_multiplier: 2,
            },
            Self::Hard => DifficultyProfile {
                inter_signal_delay: Duration::from_millis(400),
                score_multiplier: 3,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = crate::SimonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(crate::SimonError::Config(format!(
                "unknown difficulty: {other:?} (expected easy, medium, or hard)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of submitting one player press to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The press arrived outside the input window and changed nothing.
    Ignored,
    /// Correct press; more of the sequence remains.
    Continue,
    /// Correct press completed the sequence; score was awarded and the next
    /// round has been played back.
    RoundComplete,
    /// Wrong press; the game is over and the high score was recorded.
    GameOver,
}
