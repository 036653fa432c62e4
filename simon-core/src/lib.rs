//! # Simon Core
//!
//! Engine for a Simon-style sequence-memory game: the engine flashes a
//! growing sequence of signals, the player reproduces it, and a
//! difficulty-scaled score is tracked with persisted per-difficulty high
//! scores.
//!
//! The engine owns four concerns:
//!
//! - **Sequence generation** — uniform random draws from the four-signal set,
//!   behind the [`SignalSource`] port so tests can script the draws.
//! - **Playback** — timed, non-overlapping replay of the target sequence
//!   through a [`FeedbackSink`].
//! - **Input validation** — one press at a time, judged against the target,
//!   driving round continuation, round completion, or game over.
//! - **Session management** — start / difficulty-change transitions and
//!   high-score persistence through a [`ScoreStore`].
//!
//! All waiting is async suspension on the tokio clock; the engine is driven
//! from a single task through `&mut self`, so playback of one round can never
//! overlap input or playback of another. Timing tests run under tokio's
//! paused clock and observe virtual time.
//!
//! ```no_run
//! use simon_core::config::TimingConfig;
//! use simon_core::engine::SimonEngine;
//! use simon_core::feedback::NullFeedback;
//! use simon_core::source::RandomSource;
//! use simon_core::store::MemoryStore;
//! use simon_core::types::{Difficulty, Signal};
//!
//! # async fn run() {
//! let mut engine = SimonEngine::new(
//!     RandomSource::from_entropy(),
//!     NullFeedback,
//!     MemoryStore::new(),
//!     TimingConfig::default(),
//!     Difficulty::Medium,
//! );
//! engine.start_game().await;
//! let outcome = engine.submit(Signal::Green).await;
//! # let _ = outcome;
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod scores;
pub mod source;
pub mod store;
pub mod types;

pub use config::TimingConfig;
pub use engine::{GameState, SimonEngine};
pub use error::SimonError;
pub use feedback::FeedbackSink;
pub use scores::HighScoreTable;
pub use source::SignalSource;
pub use store::ScoreStore;
pub use types::{Difficulty, Outcome, Signal};
