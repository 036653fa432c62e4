//! Sequence generation — the randomness port.
//!
//! The engine never touches a global RNG. It draws signals through
//! [`SignalSource`], so production code injects an entropy-seeded
//! [`RandomSource`] and tests inject a [`ScriptedSource`] with a known
//! script. Draws are uniform over the four signals and independent of
//! history; consecutive duplicates are normal.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Signal;

/// Source of the next signal to append to a round's sequence.
pub trait SignalSource {
    /// Draw the next signal.
    fn next_signal(&mut self) -> Signal;
}

/// Uniform random signal source backed by any [`Rng`].
#[derive(Debug)]
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Entropy-seeded source for normal play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded source for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SignalSource for RandomSource<R> {
    fn next_signal(&mut self) -> Signal {
        Signal::ALL[self.rng.gen_range(0..Signal::ALL.len())]
    }
}

/// Deterministic signal source that replays a fixed script.
///
/// Intended for tests and demos. Panics in debug terms are avoided: when the
/// script runs dry the source cycles back to its start, so a long game under
/// test never aborts.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Signal>,
    pending: VecDeque<Signal>,
}

impl ScriptedSource {
    /// Create a source that yields `script` in order, then repeats it.
    #[must_use]
    pub fn new(script: Vec<Signal>) -> Self {
        let pending = script.iter().copied().collect();
        Self { script, pending }
    }
}

impl SignalSource for ScriptedSource {
    fn next_signal(&mut self) -> Signal {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(Signal::Green)
    }
}
