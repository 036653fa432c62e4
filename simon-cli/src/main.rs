//! Terminal harness for the Simon engine.
//!
//! Wires real port implementations into `simon-core`: an entropy-seeded (or
//! `--seed`ed) signal source, a stdout feedback sink, and a file-backed score
//! store. All gameplay rules live in the engine; this binary only translates
//! lines of input into presses and engine state into text.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use simon_core::config::TimingConfig;
use simon_core::engine::SimonEngine;
use simon_core::feedback::FeedbackSink;
use simon_core::source::RandomSource;
use simon_core::store::FileStore;
use simon_core::types::{Difficulty, Outcome, Signal};

/// Play Simon in the terminal.
#[derive(Debug, Parser)]
#[command(name = "simon", version, about)]
struct Args {
    /// Difficulty: easy, medium, or hard.
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Directory holding the persisted high-score table.
    #[arg(long, default_value = ".simon")]
    scores_dir: PathBuf,

    /// Seed for a reproducible sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Optional TOML file overriding the pulse and pause timings.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Prints each pulse as a colored line with its reference tone.
struct TermFeedback;

impl FeedbackSink for TermFeedback {
    fn pulse(&mut self, signal: Signal, duration: Duration) {
        let code = match signal {
            Signal::Green => 32,
            Signal::Red => 31,
            Signal::Yellow => 33,
            Signal::Blue => 34,
        };
        println!(
            "  \x1b[1;{code}m● {signal}\x1b[0m  ({:.2} Hz, {}ms)",
            signal.tone_hz(),
            duration.as_millis()
        );
    }
}

fn parse_press(line: &str) -> Option<Signal> {
    match line.trim().to_ascii_lowercase().as_str() {
        "g" | "green" => Some(Signal::Green),
        "r" | "red" => Some(Signal::Red),
        "y" | "yellow" => Some(Signal::Yellow),
        "b" | "blue" => Some(Signal::Blue),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "Starting");

    let timing = match &args.config {
        Some(path) => TimingConfig::from_file(path)
            .with_context(|| format!("loading timing config from {}", path.display()))?,
        None => TimingConfig::default(),
    };

    let source = match args.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    let mut engine = SimonEngine::new(
        source,
        TermFeedback,
        FileStore::new(&args.scores_dir),
        timing,
        args.difficulty,
    );

    let table = engine.high_scores();
    println!("Simon — difficulty: {}", args.difficulty);
    println!(
        "High scores: easy {}, medium {}, hard {}",
        table.easy, table.medium, table.hard
    );
    println!("Press g/r/y/b + enter to answer, q to quit.\n");

    println!("Watch the sequence...");
    engine.start_game().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Your turn!");

    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let Some(signal) = parse_press(&line) else {
            println!("? expected one of g/r/y/b (or q to quit)");
            continue;
        };

        match engine.submit(signal).await {
            Outcome::Ignored => println!("(not your turn)"),
            Outcome::Continue => {}
            Outcome::RoundComplete => {
                println!(
                    "Round complete! Score {} — sequence is now {} long. Your turn!",
                    engine.state().score,
                    engine.state().sequence.len()
                );
            }
            Outcome::GameOver => {
                let table = engine.high_scores();
                println!(
                    "Game over! Final score {} — best for {}: {}",
                    engine.state().score,
                    engine.state().difficulty,
                    table.get(engine.state().difficulty)
                );
                println!("Press enter to play again, q to quit.");
                match lines.next_line().await? {
                    Some(line) if !line.trim().eq_ignore_ascii_case("q") => {
                        println!("Watch the sequence...");
                        engine.start_game().await;
                        println!("Your turn!");
                    }
                    _ => break,
                }
            }
        }
    }

    Ok(())
}
