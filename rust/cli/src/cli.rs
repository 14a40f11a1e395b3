//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::MAX_ROUNDS;

#[derive(Parser, Debug)]
#[command(
    name = "eights",
    version,
    about = "Crazy Eights against a computer opponent"
)]
pub struct EightsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against the computer
    Play {
        /// Rounds in the game (default: 3 to 5, drawn from the seed)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_ROUNDS as i64))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Offer the post-game multiplier gamble to the trailing side
        #[arg(long)]
        gamble: bool,
        /// Append every finished round to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Play computer-vs-computer games and report the results
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Policy playing the first seat
        #[arg(long, default_value = "baseline")]
        ai_a: String,
        /// Policy playing the second seat
        #[arg(long, default_value = "random")]
        ai_b: String,
        /// Write every round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a JSONL file of round records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Deal one round and show both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
