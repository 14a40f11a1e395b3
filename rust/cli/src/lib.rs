//! # Eights CLI Library
//!
//! Command-line front end for the Crazy Eights engine: an interactive game
//! against the computer plus tools around it.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and executes the subcommand, reading
//! interactive input from stdin. [`run_with_input`] takes the input stream
//! explicitly.
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game against the computer
//! - `sim`: Computer-vs-computer games with a JSON summary
//! - `stats`: Aggregate JSONL round records
//! - `deal`: Deal one round for inspection
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, EightsCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the exit code: `0` for success, `2` for errors, `130` when input
/// ends in the middle of a game.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["eights", "deal", "--seed", "42"];
/// let code = eights_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with interactive input read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match EightsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    writeln_or_bail!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    writeln_or_bail!(err, "{}", e);
                    writeln_or_bail!(err, "Crazy Eights CLI");
                    writeln_or_bail!(err, "Usage: eights <command> [options]\n");
                    writeln_or_bail!(err, "Commands:");
                    for c in COMMANDS {
                        writeln_or_bail!(err, "  {}", c);
                    }
                    writeln_or_bail!(err, "\nFor full help, run: eights --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            gamble,
            log,
        } => handle_play_command(rounds, seed, gamble, log, out, err, input),
        Commands::Sim {
            games,
            seed,
            ai_a,
            ai_b,
            output,
        } => handle_sim_command(games, seed, &ai_a, &ai_b, output, out, err),
        Commands::Stats { input: path } => handle_stats_command(&path, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            writeln_or_bail!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            writeln_or_bail!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
