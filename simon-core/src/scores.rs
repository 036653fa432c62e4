//! Per-difficulty high scores and their persistence.
//!
//! The table is stored as a single JSON blob under
//! [`HIGH_SCORES_KEY`](crate::store::HIGH_SCORES_KEY):
//!
//! ```json
//! {"easy": 0, "medium": 0, "hard": 0}
//! ```
//!
//! A missing or corrupt blob is never fatal — the board falls back to an
//! all-zero table with a warning, matching how the original treated a bad
//! local-storage entry.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::store::{HIGH_SCORES_KEY, ScoreStore};
use crate::types::Difficulty;

/// Best score ever achieved in each difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    /// Best easy-mode score.
    #[serde(default)]
    pub easy: u32,
    /// Best medium-mode score.
    #[serde(default)]
    pub medium: u32,
    /// Best hard-mode score.
    #[serde(default)]
    pub hard: u32,
}

impl HighScoreTable {
    /// Best score for `difficulty`.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Record `score` for `difficulty` with max semantics. Returns `true` if
    /// the table changed.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let slot = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

/// High-score table bound to a [`ScoreStore`].
///
/// Loads once at construction; writes back only when a finished game beats
/// the stored best for its difficulty.
#[derive(Debug)]
pub struct ScoreBoard<K: ScoreStore> {
    store: K,
    table: HighScoreTable,
}

impl<K: ScoreStore> ScoreBoard<K> {
    /// Load the table from `store`. Absent or unreadable data yields the
    /// all-zero default.
    pub fn load(store: K) -> Self {
        let table = match store.read(HIGH_SCORES_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(table) => table,
                Err(e) => {
                    warn!(error = %e, "Corrupt high-score blob, starting from zero");
                    HighScoreTable::default()
                }
            },
            Ok(None) => HighScoreTable::default(),
            Err(e) => {
                warn!(error = %e, "High-score store unreadable, starting from zero");
                HighScoreTable::default()
            }
        };
        Self { store, table }
    }

    /// The current table.
    #[must_use]
    pub fn table(&self) -> HighScoreTable {
        self.table
    }

    /// Record a finished game's score. Persists the table only when the
    /// stored best improved.
    ///
    /// # Errors
    /// Returns an error if the improved table cannot be encoded or written;
    /// the in-memory table keeps the improvement either way.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> Result<bool> {
        if !self.table.record(difficulty, score) {
            debug!(%difficulty, score, "Score did not beat stored best");
            return Ok(false);
        }

        let blob = serde_json::to_string(&self.table)
            .map_err(|e| crate::SimonError::Serialization(e.to_string()))?;
        self.store.write(HIGH_SCORES_KEY, &blob)?;
        debug!(%difficulty, score, "New high score persisted");
        Ok(true)
    }
}
