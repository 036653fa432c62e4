//! Timing configuration for the Simon engine.
//!
//! The three fixed pauses of the game loop, loadable from TOML. Defaults are
//! the classic values; the per-difficulty delay/multiplier table lives on
//! [`Difficulty`](crate::Difficulty) and is not configurable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed pauses used by playback and session transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long each signal pulse stays active, in milliseconds.
    #[serde(default = "default_flash_ms")]
    pub signal_flash_ms: u64,
    /// Pause between a completed round and the next playback, in milliseconds.
    #[serde(default = "default_round_pause_ms")]
    pub round_pause_ms: u64,
    /// Pause between game start and the first playback, in milliseconds.
    #[serde(default = "default_start_pause_ms")]
    pub start_pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            signal_flash_ms: 300,
            round_pause_ms: 1000,
            start_pause_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`SimonError::Config`](crate::SimonError::Config) if the TOML
    /// is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::SimonError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Duration of one signal pulse.
    #[must_use]
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.signal_flash_ms)
    }

    /// Pause before the next round's playback begins.
    #[must_use]
    pub fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }

    /// Pause before the first playback of a new game.
    #[must_use]
    pub fn start_pause(&self) -> Duration {
        Duration::from_millis(self.start_pause_ms)
    }

    /// Settling gap between two playback pulses for the given inter-signal
    /// delay. Zero if the delay is shorter than the flash itself.
    #[must_use]
    pub fn settle_gap(&self, inter_signal_delay: Duration) -> Duration {
        inter_signal_delay.saturating_sub(self.flash())
    }
}

fn default_flash_ms() -> u64 {
    300
}

fn default_round_pause_ms() -> u64 {
    1000
}

fn default_start_pause_ms() -> u64 {
    500
}
