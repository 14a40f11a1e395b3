//! Simulation command: computer-vs-computer games.
//!
//! Two policies play `games` complete games. Seats alternate between games so
//! neither policy always moves first. Each game gets its own seed derived
//! from the base seed, so a run is reproducible end to end.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! let code = eights_cli::run(
//!     ["eights", "sim", "--games", "500", "--seed", "42", "--output", "data/sim.jsonl"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::error::CliError;
use crate::ui;
use chrono::{SecondsFormat, Utc};
use eights_ai::{create_ai, play_turn, Opponent};
use eights_engine::game::{Game, GameOutcome};
use eights_engine::logger::RoundLogger;
use eights_engine::player::Side;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Default, Serialize)]
struct SeatStats {
    name: String,
    wins: u32,
    total_points: u64,
    avg_points: f64,
}

/// Runs the simulation and prints a JSON summary.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero games, `CliError::Config` for an unknown
/// policy, `CliError::Io` when the output file cannot be written.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    ai_a: &str,
    ai_b: &str,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    let mut seeds = ChaCha20Rng::seed_from_u64(base_seed);
    let policy_a = create_ai(ai_a, seeds.next_u64()).map_err(CliError::Config)?;
    let policy_b = create_ai(ai_b, seeds.next_u64()).map_err(CliError::Config)?;

    let mut logger = match output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut a = SeatStats {
        name: ai_a.to_string(),
        ..SeatStats::default()
    };
    let mut b = SeatStats {
        name: ai_b.to_string(),
        ..SeatStats::default()
    };
    let mut ties = 0u32;
    let mut rounds = 0u64;

    for index in 0..games {
        // A takes the human seat (and the opening move) in even games
        let a_seat = if index % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        };
        let mut game = Game::with_random_rounds(seeds.next_u64());
        while !game.is_over() {
            let mut round = game.start_round()?;
            while let Some(side) = round.to_act() {
                let ai: &dyn Opponent = if side == a_seat {
                    policy_a.as_ref()
                } else {
                    policy_b.as_ref()
                };
                play_turn(ai, &mut round, side)?;
            }
            game.record_round(&round)?;
            rounds += 1;
            if let Some(logger) = logger.as_mut() {
                let mut record = round.record(logger.next_id());
                record.meta = Some(serde_json::json!({
                    "game": index + 1,
                    "human_seat": seat_name(a_seat, ai_a, ai_b, Side::Human),
                    "computer_seat": seat_name(a_seat, ai_a, ai_b, Side::Computer),
                }));
                logger.write(&record)?;
            }
        }

        let scores = game.scores();
        a.total_points += u64::from(scores.for_side(a_seat));
        b.total_points += u64::from(scores.for_side(a_seat.other()));
        match game.outcome() {
            Some(GameOutcome::Winner(side)) if side == a_seat => a.wins += 1,
            Some(GameOutcome::Winner(_)) => b.wins += 1,
            Some(GameOutcome::Tie) | None => ties += 1,
        }
        debug!(game = index + 1, human = scores.human, computer = scores.computer, "game finished");
    }

    a.avg_points = a.total_points as f64 / f64::from(games);
    b.avg_points = b.total_points as f64 / f64::from(games);
    info!(games, rounds, a_wins = a.wins, b_wins = b.wins, ties, "simulation finished");

    let summary = serde_json::json!({
        "games": games,
        "rounds": rounds,
        "seed": base_seed,
        "ai_a": a,
        "ai_b": b,
        "ties": ties,
        "generated_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    });
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn seat_name<'a>(a_seat: Side, ai_a: &'a str, ai_b: &'a str, seat: Side) -> &'a str {
    if seat == a_seat { ai_a } else { ai_b }
}
