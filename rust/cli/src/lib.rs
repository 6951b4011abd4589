//! # Hold'em CLI Library
//!
//! Command-line front end for the Texas Hold'em round simulator: an
//! interactive game against computer opponents plus a few tools around it.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand. Streams are passed in so the whole CLI can be driven from
//! tests.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "score", "AS", "AD"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Two of a Kind"));
//! ```
//!
//! ## Subcommands
//!
//! - `play`: interactive game over stdin/stdout
//! - `sim`: all-computer table with chip conservation checks
//! - `score`: evaluate 2 to 7 cards
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod roster;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_score_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "score", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`],
/// [`exit_code::ERROR`] or [`exit_code::INTERRUPTED`]. Help and version
/// text go to `out`; usage errors go to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            opponents,
            seed,
            decks,
            name,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opponents, seed, decks, name, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            opponents,
            seed,
            output,
        } => handle_sim_command(rounds, opponents, seed, output, out, err),
        Commands::Score { cards } => handle_score_command(&cards, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version are not failures
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Hold'em CLI")?;
        writeln!(err, "Usage: holdem <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: holdem --help")
    };
    let _ = report();
    exit_code::ERROR
}
