//! # Play Command
//!
//! Interactive Crazy Eights against the computer.
//!
//! The human types one command per line: a card short name (`8H`, `10D`),
//! `d` to draw, `h` to show the table, `q` to quit. After an eight the human
//! names a suit (`d`/`h`/`s`/`c` or the full name). Rejected input is
//! reported on stderr and the prompt repeats. The computer's turns run through
//! [`eights_ai::play_turn`] without any prompting.
//!
//! End of input in the middle of a game is reported as an interruption.

use crate::config;
use crate::error::CliError;
use crate::formatters::{
    format_event, format_outcome, format_round_score, format_scores, format_table,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_command, parse_multiplier, parse_suit, ParseResult};
use eights_ai::{create_ai, play_turn, Opponent};
use eights_engine::errors::MoveError;
use eights_engine::game::Game;
use eights_engine::logger::RoundLogger;
use eights_engine::player::Side;
use eights_engine::round::{Phase, Round, Turn};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// How a round left the interactive loop.
#[derive(Debug, PartialEq, Eq)]
enum RoundFlow {
    Finished,
    Quit,
}

/// Handle the play command: a full game read from `stdin`.
///
/// Flags win over the configuration; without `--rounds` or a configured
/// round count the game length is drawn from the seed.
///
/// # Errors
///
/// - `CliError::Config` for an invalid configuration or unknown AI
/// - `CliError::Interrupted` when input ends before the game does
/// - `CliError::Io` for unwritable output or log file
/// - `CliError::Engine` if the engine reports a broken invariant
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    gamble: bool,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let rounds = rounds.or(cfg.rounds);
    if let Some(n) = rounds {
        config::validate_rounds(n)?;
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let gamble = gamble || cfg.gamble;
    let ai = create_ai(&cfg.ai, seed).map_err(CliError::Config)?;

    let mut game = match rounds {
        Some(n) => Game::new(seed, n),
        None => Game::with_random_rounds(seed),
    };
    let mut logger = match log {
        Some(path) => Some(RoundLogger::create(&path).map_err(|e| {
            CliError::Io(std::io::Error::new(
                e.kind(),
                format!("cannot open log {}: {}", path, e),
            ))
        })?),
        None => None,
    };

    writeln!(
        out,
        "play: rounds={} seed={} ai={}",
        game.total_rounds(),
        seed,
        ai.name()
    )?;
    info!(seed, rounds = game.total_rounds(), ai = ai.name(), "game started");

    while !game.is_over() {
        let mut round = game.start_round()?;
        writeln!(out)?;
        writeln!(out, "Round {} of {}", round.number(), game.total_rounds())?;

        if play_round(&mut round, ai.as_ref(), out, err, stdin)? == RoundFlow::Quit {
            writeln!(
                out,
                "Game abandoned after {} round(s).",
                game.rounds_played()
            )?;
            writeln!(out, "{}", format_scores(&game.scores()))?;
            return Ok(());
        }

        let score = game.record_round(&round)?;
        if let Some(logger) = logger.as_mut() {
            let record = round.record(logger.next_id());
            logger.write(&record)?;
        }
        writeln!(out, "{}", format_round_score(round.number(), &score))?;
        writeln!(out, "{}", format_scores(&game.scores()))?;
    }

    writeln!(out)?;
    writeln!(out, "Game over")?;
    if gamble {
        offer_gamble(&mut game, out, err, stdin)?;
    }
    writeln!(out, "Final {}", format_scores(&game.scores()))?;
    if let Some(outcome) = game.outcome() {
        writeln!(out, "{}", format_outcome(outcome))?;
    }
    Ok(())
}

/// Drives one round until it ends or the human quits.
fn play_round(
    round: &mut Round,
    ai: &dyn Opponent,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<RoundFlow, CliError> {
    let mut show_table = true;
    loop {
        for event in round.drain_events() {
            if let Some(line) = format_event(&event) {
                writeln!(out, "{}", line)?;
            }
        }

        match round.phase() {
            Phase::RoundOver => return Ok(RoundFlow::Finished),
            Phase::Dealing => {
                return Err(CliError::Engine("round was never dealt".to_string()));
            }
            Phase::PlayerTurn => {
                if show_table {
                    writeln!(out, "{}", format_table(&round.view()))?;
                    show_table = false;
                }
                ui::prompt(out, "Your move (card, d=draw, h=hand, q=quit): ")?;
                let line = next_line(stdin)?;
                let result = match parse_command(&line) {
                    ParseResult::Play(name) => round.play_named(Side::Human, &name),
                    ParseResult::Draw => round.draw(Side::Human),
                    ParseResult::ShowHand => {
                        show_table = true;
                        continue;
                    }
                    ParseResult::Quit => return Ok(RoundFlow::Quit),
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                };
                accept_human_move(result, err)?;
            }
            Phase::ChooseSuit(Side::Human) => {
                ui::prompt(out, "Name the new suit (d/h/s/c): ")?;
                let line = next_line(stdin)?;
                if matches!(parse_command(&line), ParseResult::Quit) {
                    return Ok(RoundFlow::Quit);
                }
                match parse_suit(&line) {
                    Ok(suit) => accept_human_move(round.declare_suit(Side::Human, suit), err)?,
                    Err(msg) => ui::write_error(err, &msg)?,
                }
            }
            Phase::ComputerTurn | Phase::ChooseSuit(Side::Computer) => {
                play_turn(ai, round, Side::Computer)?;
                show_table = true;
            }
        }
    }
}

fn next_line(stdin: &mut dyn BufRead) -> Result<String, CliError> {
    read_stdin_line(stdin).ok_or_else(|| CliError::Interrupted("input closed".to_string()))
}

/// Reports a rejected move and carries on; fatal engine errors propagate.
fn accept_human_move(
    result: Result<Turn, MoveError>,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            warn!(error = %e, "move rejected");
            ui::write_error(err, &e.to_string())?;
            Ok(())
        }
    }
}

/// Post-game multiplier for the trailing side; nothing happens on a tie.
fn offer_gamble(
    game: &mut Game,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let Some(side) = game.gamble_side() else {
        writeln!(out, "Scores are tied: no gamble.")?;
        return Ok(());
    };

    let multiplier = match side {
        Side::Human => loop {
            writeln!(out, "You trail. Gamble on your total.")?;
            ui::prompt(out, "Multiplier (1-3): ")?;
            match parse_multiplier(&next_line(stdin)?) {
                Ok(m) => break m,
                Err(msg) => ui::write_error(err, &msg)?,
            }
        },
        // the game draws the computer's multiplier itself
        Side::Computer => 1,
    };

    if let Some(result) = game.gamble(multiplier)? {
        let who = match result.side {
            Side::Human => "You gamble",
            Side::Computer => "Computer gambles",
        };
        writeln!(
            out,
            "{} x{}: {} -> {}",
            who, result.multiplier, result.before, result.after
        )?;
    }
    Ok(())
}
