//! The game engine: session management, sequence playback, input validation.
//!
//! One round cycles `Playback → AwaitingInput → …` until either the player
//! completes the sequence (score up, sequence grows, next playback) or
//! misses (game over, high score recorded). The engine is driven from a
//! single task; every wait is a suspension on the tokio clock, and the
//! `is_playing` / `is_playing_sequence` flag pair is the observable
//! input-window gate.
//!
//! Ordering guarantee: playback of round N+1 is awaited inside the call that
//! completed round N, so it can never begin before round N has fully
//! resolved. There is no cancellation — a playback always runs to
//! completion, and session-changing calls made while it would be running are
//! structurally impossible (`&mut self`) and additionally gated on the flag.

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::TimingConfig;
use crate::feedback::FeedbackSink;
use crate::scores::{HighScoreTable, ScoreBoard};
use crate::source::SignalSource;
use crate::store::ScoreStore;
use crate::types::{Difficulty, Outcome, Signal};

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// Mutable state of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The target sequence the player must reproduce.
    pub sequence: Vec<Signal>,
    /// How many presses of the current round have been accepted.
    pub progress: usize,
    /// Current score.
    pub score: u32,
    /// Whether a game is in progress.
    pub is_playing: bool,
    /// Whether the sequence is currently being replayed to the player.
    pub is_playing_sequence: bool,
    /// Whether the game ended on a wrong press.
    pub game_over: bool,
    /// Active difficulty.
    pub difficulty: Difficulty,
}

impl GameState {
    /// Fresh pre-game state at the given difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            sequence: Vec::new(),
            progress: 0,
            score: 0,
            is_playing: false,
            is_playing_sequence: false,
            game_over: false,
            difficulty,
        }
    }

    /// Whether a player press would currently be accepted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.is_playing && !self.is_playing_sequence && !self.game_over
    }
}

// ---------------------------------------------------------------------------
// SimonEngine
// ---------------------------------------------------------------------------

/// The game engine, generic over its three ports.
///
/// `S` draws new signals, `F` receives pulses, `K` persists high scores.
pub struct SimonEngine<S, F, K>
where
    S: SignalSource,
    F: FeedbackSink,
    K: ScoreStore,
{
    source: S,
    feedback: F,
    scores: ScoreBoard<K>,
    timing: TimingConfig,
    state: GameState,
}

impl<S, F, K> std::fmt::Debug for SimonEngine<S, F, K>
where
    S: SignalSource,
    F: FeedbackSink,
    K: ScoreStore,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimonEngine")
            .field("state", &self.state)
            .field("high_scores", &self.scores.table())
            .finish_non_exhaustive()
    }
}

impl<S, F, K> SimonEngine<S, F, K>
where
    S: SignalSource,
    F: FeedbackSink,
    K: ScoreStore,
{
    /// Create an engine in the pre-game state. High scores are loaded from
    /// `store` immediately; a missing or corrupt entry reads as all zeros.
    pub fn new(
        source: S,
        feedback: F,
        store: K,
        timing: TimingConfig,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            source,
            feedback,
            scores: ScoreBoard::load(store),
            timing,
            state: GameState::new(difficulty),
        }
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current high-score table.
    #[must_use]
    pub fn high_scores(&self) -> HighScoreTable {
        self.scores.table()
    }

    // ------------------------------------------------------------------
    // Session transitions
    // ------------------------------------------------------------------

    /// Start a new game: one drawn signal, score zero, then — after the
    /// start pause — a full playback of the initial sequence.
    ///
    /// Ignored if called while a playback is in flight.
    pub async fn start_game(&mut self) {
        if self.state.is_playing_sequence {
            debug!("start_game ignored during playback");
            return;
        }

        let first = self.source.next_signal();
        let difficulty = self.state.difficulty;
        self.state = GameState {
            sequence: vec![first],
            is_playing: true,
            ..GameState::new(difficulty)
        };
        info!(%difficulty, "Game started");

        sleep(self.timing.start_pause()).await;
        self.play_sequence().await;
    }

    /// Switch difficulty and reset to the pre-game state.
    ///
    /// Only permitted while no game is in progress; otherwise ignored.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.is_playing {
            debug!(%difficulty, "change_difficulty ignored mid-game");
            return;
        }
        self.state = GameState::new(difficulty);
        debug!(%difficulty, "Difficulty changed");
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    /// Pulse one signal and hold it for the flash duration.
    async fn flash(&mut self, signal: Signal) {
        let flash = self.timing.flash();
        self.feedback.pulse(signal, flash);
        sleep(flash).await;
    }

    /// Replay the whole target sequence: each element flashes for the flash
    /// duration, with the difficulty's settling gap between elements and no
    /// gap after the last. Input is rejected for the whole replay.
    async fn play_sequence(&mut self) {
        self.state.is_playing_sequence = true;
        self.state.progress = 0;

        let sequence = self.state.sequence.clone();
        let gap = self
            .timing
            .settle_gap(self.state.difficulty.profile().inter_signal_delay);
        debug!(length = sequence.len(), "Playing back sequence");

        for (i, &signal) in sequence.iter().enumerate() {
            self.flash(signal).await;
            if i + 1 < sequence.len() {
                sleep(gap).await;
            }
        }

        self.state.is_playing_sequence = false;
    }

    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------

    /// Submit one player press.
    ///
    /// Outside the input window (`is_playing && !is_playing_sequence &&
    /// !game_over`) the press is ignored. Inside it, the press is flashed
    /// regardless of correctness, then judged against the expected element:
    ///
    /// - wrong ⇒ [`Outcome::GameOver`] — the high score is recorded and the
    ///   session goes terminal until [`start_game`](Self::start_game);
    /// - right, sequence unfinished ⇒ [`Outcome::Continue`];
    /// - right, sequence finished ⇒ [`Outcome::RoundComplete`] — score is
    ///   awarded, the sequence grows by one draw, and after the round pause
    ///   the grown sequence is played back before this call returns.
    pub async fn submit(&mut self, signal: Signal) -> Outcome {
        if !self.state.accepts_input() {
            debug!(%signal, "Press ignored outside input window");
            return Outcome::Ignored;
        }

        self.flash(signal).await;

        let expected = self.state.sequence[self.state.progress];
        if signal != expected {
            return self.finish_game(signal, expected);
        }

        self.state.progress += 1;
        if self.state.progress < self.state.sequence.len() {
            return Outcome::Continue;
        }

        self.complete_round().await;
        Outcome::RoundComplete
    }

    /// Wrong press: record the high score and go terminal.
    fn finish_game(&mut self, pressed: Signal, expected: Signal) -> Outcome {
        info!(
            %pressed,
            %expected,
            score = self.state.score,
            "Wrong signal, game over"
        );
        if let Err(e) = self.scores.record(self.state.difficulty, self.state.score) {
            warn!(error = %e, "Failed to persist high score");
        }
        self.state.game_over = true;
        self.state.is_playing = false;
        Outcome::GameOver
    }

    /// Correct final press: award score, grow the sequence, pause, replay.
    async fn complete_round(&mut self) {
        let multiplier = self.state.difficulty.profile().score_multiplier;
        self.state.score += multiplier;

        let next = self.source.next_signal();
        self.state.sequence.push(next);
        self.state.progress = 0;
        debug!(
            score = self.state.score,
            length = self.state.sequence.len(),
            "Round complete"
        );

        sleep(self.timing.round_pause()).await;
        self.play_sequence().await;
    }
}
