//! Audio/visual feedback — the presentation port.
//!
//! The engine reports every signal activation through [`FeedbackSink`]; what
//! a pulse looks or sounds like is the sink's business. The engine itself
//! holds the pulse active for the configured flash duration, so sinks only
//! need to start the effect, not time it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::types::Signal;

/// Receiver of signal pulses. One call per activation, during both playback
/// and player presses.
pub trait FeedbackSink {
    /// Produce a perceptible pulse (highlight, tone) for `signal` lasting
    /// `duration`. Must not block.
    fn pulse(&mut self, signal: Signal, duration: Duration);
}

/// Sink that discards all pulses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn pulse(&mut self, _signal: Signal, _duration: Duration) {}
}

/// One recorded pulse, stamped with the tokio clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Which signal was activated.
    pub signal: Signal,
    /// How long the pulse was declared to last.
    pub duration: Duration,
    /// When the pulse started. Under a paused tokio clock this is virtual
    /// time, which makes playback spacing exactly assertable.
    pub at: tokio::time::Instant,
}

/// Sink that records every pulse, for timing assertions in tests.
///
/// Clones share the same recording, so a test can keep a handle while the
/// engine owns the sink.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    inner: Arc<Mutex<Vec<Pulse>>>,
}

impl RecordingFeedback {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all pulses recorded so far.
    #[must_use]
    pub fn pulses(&self) -> Vec<Pulse> {
        self.inner.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Signals recorded so far, in pulse order.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal> {
        self.pulses().iter().map(|p| p.signal).collect()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn pulse(&mut self, signal: Signal, duration: Duration) {
        if let Ok(mut pulses) = self.inner.lock() {
            pulses.push(Pulse {
                signal,
                duration,
                at: tokio::time::Instant::now(),
            });
        }
    }
}
