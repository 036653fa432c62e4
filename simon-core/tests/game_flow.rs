//! Integration tests — end-to-end game flows.
//!
//! Everything runs under tokio's paused clock, so the fixed pauses and
//! per-difficulty playback pacing are asserted against exact virtual time.

use std::time::Duration;

use simon_core::config::TimingConfig;
use simon_core::engine::{GameState, SimonEngine};
use simon_core::feedback::{NullFeedback, RecordingFeedback};
use simon_core::source::ScriptedSource;
use simon_core::store::{FileStore, HIGH_SCORES_KEY, MemoryStore};
use simon_core::types::{Difficulty, Outcome, Signal};

fn scripted(signals: &[Signal]) -> ScriptedSource {
    ScriptedSource::new(signals.to_vec())
}

// ---------------------------------------------------------------------------
// The canonical easy-mode scenario: two clean rounds, then a miss
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn easy_game_two_rounds_then_miss() {
    let store = MemoryStore::with_entry(HIGH_SCORES_KEY, "{\"easy\":1,\"medium\":5,\"hard\":0}");
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Green, Signal::Red, Signal::Blue]),
        NullFeedback,
        store,
        TimingConfig::default(),
        Difficulty::Easy,
    );

    engine.start_game().await;
    assert_eq!(engine.state().sequence, vec![Signal::Green]);
    assert_eq!(engine.state().score, 0);

    // Round 1: single correct press completes the round.
    assert_eq!(engine.submit(Signal::Green).await, Outcome::RoundComplete);
    assert_eq!(engine.state().score, 1);
    assert_eq!(engine.state().sequence.len(), 2);

    // Round 2: both correct presses.
    assert_eq!(engine.submit(Signal::Green).await, Outcome::Continue);
    assert_eq!(engine.submit(Signal::Red).await, Outcome::RoundComplete);
    assert_eq!(engine.state().score, 2);
    assert_eq!(engine.state().sequence.len(), 3);

    // Round 3: wrong opening press.
    assert_eq!(engine.submit(Signal::Yellow).await, Outcome::GameOver);
    assert_eq!(engine.state().score, 2, "score is frozen at game over");
    assert!(engine.state().game_over);
    assert!(!engine.state().is_playing);

    // Stored best for easy is max(1, 2) = 2; other difficulties untouched.
    let table = engine.high_scores();
    assert_eq!(table.easy, 2);
    assert_eq!(table.medium, 5);
    assert_eq!(table.hard, 0);
}

#[tokio::test(start_paused = true)]
async fn worse_final_score_does_not_overwrite_stored_best() {
    let store = MemoryStore::with_entry(HIGH_SCORES_KEY, "{\"easy\":10}");
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Green, Signal::Red]),
        NullFeedback,
        store,
        TimingConfig::default(),
        Difficulty::Easy,
    );

    engine.start_game().await;
    engine.submit(Signal::Green).await; // score 1
    engine.submit(Signal::Yellow).await; // game over

    assert_eq!(engine.high_scores().easy, 10);
}

// ---------------------------------------------------------------------------
// Degraded persistence
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn corrupt_store_reads_as_all_zero_and_still_records() {
    let store = MemoryStore::with_entry(HIGH_SCORES_KEY, "\u{1}garbage");
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Blue, Signal::Blue]),
        NullFeedback,
        store,
        TimingConfig::default(),
        Difficulty::Medium,
    );

    let table = engine.high_scores();
    assert_eq!((table.easy, table.medium, table.hard), (0, 0, 0));

    engine.start_game().await;
    engine.submit(Signal::Blue).await; // score 2
    engine.submit(Signal::Green).await; // game over
    assert_eq!(engine.high_scores().medium, 2);
}

#[tokio::test(start_paused = true)]
async fn recorded_table_survives_a_new_session_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut engine = SimonEngine::new(
            scripted(&[Signal::Red, Signal::Green]),
            NullFeedback,
            FileStore::new(dir.path()),
            TimingConfig::default(),
            Difficulty::Hard,
        );
        engine.start_game().await;
        engine.submit(Signal::Red).await; // score 3
        engine.submit(Signal::Blue).await; // game over
        assert_eq!(engine.high_scores().hard, 3);
    }

    // A fresh engine over the same directory sees the recorded best.
    let engine = SimonEngine::new(
        scripted(&[Signal::Red]),
        NullFeedback,
        FileStore::new(dir.path()),
        TimingConfig::default(),
        Difficulty::Hard,
    );
    assert_eq!(engine.high_scores().hard, 3);
    assert_eq!(engine.high_scores().easy, 0);
}

// ---------------------------------------------------------------------------
// Input windows
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn presses_outside_the_window_change_nothing() {
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Red]),
        NullFeedback,
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Easy,
    );

    // Before start.
    assert_eq!(engine.submit(Signal::Red).await, Outcome::Ignored);
    assert_eq!(engine.state().score, 0);
    assert!(engine.state().sequence.is_empty());

    // After game over.
    engine.start_game().await;
    engine.submit(Signal::Blue).await;
    let terminal = engine.state().clone();
    assert_eq!(engine.submit(Signal::Red).await, Outcome::Ignored);
    assert_eq!(*engine.state(), terminal);
}

#[test]
fn playback_flag_closes_the_input_window() {
    let mut state = GameState::new(Difficulty::Medium);
    state.is_playing = true;
    assert!(state.accepts_input());
    state.is_playing_sequence = true;
    assert!(!state.accepts_input());
}

// ---------------------------------------------------------------------------
// Timing — exact virtual-time assertions
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn first_playback_starts_after_the_start_pause() {
    let recorder = RecordingFeedback::new();
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Red]),
        recorder.clone(),
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Medium,
    );

    let t0 = tokio::time::Instant::now();
    engine.start_game().await;

    let pulses = recorder.pulses();
    assert_eq!(pulses.len(), 1);
    assert_eq!(pulses[0].signal, Signal::Red);
    assert_eq!(pulses[0].at - t0, Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn playback_pacing_follows_the_difficulty_delay() {
    // Medium: 700ms from pulse start to pulse start, 300ms flash, no gap
    // after the final element.
    let recorder = RecordingFeedback::new();
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Red, Signal::Blue, Signal::Green]),
        recorder.clone(),
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Medium,
    );

    engine.start_game().await;
    engine.submit(Signal::Red).await; // grows to [Red, Blue]
    engine.submit(Signal::Red).await;
    engine.submit(Signal::Blue).await; // grows to [Red, Blue, Green]

    // Last three pulses are the length-3 playback.
    let pulses = recorder.pulses();
    let playback = &pulses[pulses.len() - 3..];
    assert_eq!(
        playback.iter().map(|p| p.signal).collect::<Vec<_>>(),
        vec![Signal::Red, Signal::Blue, Signal::Green]
    );
    assert_eq!(playback[1].at - playback[0].at, Duration::from_millis(700));
    assert_eq!(playback[2].at - playback[1].at, Duration::from_millis(700));

    // Whole playback spans 300*3 + (700-300)*2 = 1700ms: the final flash ends
    // exactly when the call returns.
    let end = tokio::time::Instant::now();
    assert_eq!(end - playback[0].at, Duration::from_millis(1700));
}

#[tokio::test(start_paused = true)]
async fn next_round_playback_waits_for_the_round_pause() {
    let recorder = RecordingFeedback::new();
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Red, Signal::Blue]),
        recorder.clone(),
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Easy,
    );

    engine.start_game().await;
    engine.submit(Signal::Red).await;

    // Pulses: playback [Red], player press Red, playback [Red, Blue].
    let pulses = recorder.pulses();
    assert_eq!(pulses.len(), 4);
    let press = pulses[1];
    let replay_start = pulses[2];
    // 300ms press flash + 1000ms pause between press start and replay start.
    assert_eq!(replay_start.at - press.at, Duration::from_millis(1300));
}

#[tokio::test(start_paused = true)]
async fn player_press_is_flashed_even_when_wrong() {
    let recorder = RecordingFeedback::new();
    let mut engine = SimonEngine::new(
        scripted(&[Signal::Red]),
        recorder.clone(),
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Easy,
    );

    engine.start_game().await;
    engine.submit(Signal::Yellow).await;

    let signals = recorder.signals();
    assert_eq!(signals, vec![Signal::Red, Signal::Yellow]);
}

// ---------------------------------------------------------------------------
// Longer runs
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn ten_clean_rounds_score_and_growth() {
    let script = [
        Signal::Green,
        Signal::Red,
        Signal::Yellow,
        Signal::Blue,
        Signal::Blue,
        Signal::Green,
        Signal::Yellow,
        Signal::Red,
        Signal::Green,
        Signal::Blue,
        Signal::Red,
    ];
    let mut engine = SimonEngine::new(
        scripted(&script),
        NullFeedback,
        MemoryStore::new(),
        TimingConfig::default(),
        Difficulty::Hard,
    );

    engine.start_game().await;
    for round in 1..=10 {
        let target = engine.state().sequence.clone();
        assert_eq!(target.len(), round);
        for (i, signal) in target.iter().enumerate() {
            let outcome = engine.submit(*signal).await;
            if i + 1 == target.len() {
                assert_eq!(outcome, Outcome::RoundComplete);
            } else {
                assert_eq!(outcome, Outcome::Continue);
            }
        }
        assert_eq!(engine.state().score, round as u32 * 3);
    }
    assert_eq!(engine.state().sequence.len(), 11);
}
