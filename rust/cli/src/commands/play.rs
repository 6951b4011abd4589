//! # Play Command
//!
//! An interactive session: the human sits last at a table of computer
//! opponents and plays round after round until they stop, go bankrupt or
//! are the only player left. Prompts are answered on `stdin`; when input
//! runs out the human folds and the session ends after the round.

use std::io::{BufRead, Write};

use holdem_ai::create_ai;
use holdem_engine::engine::{BettingEngine, Collaborators};
use holdem_engine::game::{GameState, SessionStatus};
use holdem_engine::rng::{RandomSource, SeededRandom};
use tracing::info;

use crate::commands::load_config;
use crate::console::{ConsoleInput, ConsoleOutput, SharedWriter};
use crate::error::CliError;
use crate::formatters::format_result;
use crate::roster::build_roster;

const DEFAULT_NAME: &str = "Player";

/// Handle the play command.
///
/// # Arguments
///
/// * `opponents`, `seed`, `decks` - override the configured values
/// * `name` - the human's name; asked for on `stdin` when `None`
/// * `out` - narration and prompts
/// * `err` - configuration errors
/// * `stdin` - the human's answers
pub fn handle_play_command(
    opponents: Option<usize>,
    seed: Option<u64>,
    decks: Option<usize>,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = load_config(err)?.with_overrides(opponents, seed, decks)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let policy = create_ai("holdem", config.ai_params())?;

    let writer = SharedWriter::new(out);
    let mut input = ConsoleInput::new(stdin, &writer);
    let mut output = ConsoleOutput::new(&writer);
    let mut rng = SeededRandom::new(seed);

    writer.line("Hi! This is a program that simulates a game of Texas Hold 'em!");
    writer.line(
        "The game will continue until you cash out, are eliminated, or are the last person left",
    );
    writer.line(
        "This program is designed for one player; your opponents are all pre-programmed AI",
    );
    let name = match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => {
            writer.prompt("Please enter your name: ");
            input
                .read_text()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_string())
        }
    };
    writer.line(&format!(
        "Hi {}! It's time to get your game on, good luck!",
        name
    ));
    writer.line("");

    let players = build_roster(&config, Some(&name), &mut rng);
    let first = rng.pick(players.len());
    let mut game = GameState::new(players, first);
    info!(seed, opponents = config.opponents, first_player = first, "session started");

    let io = Collaborators {
        input: &mut input,
        output: &mut output,
        rng: &mut rng,
        policy: policy.as_ref(),
    };
    let mut engine = BettingEngine::new(config.table_rules(), io)?.with_seed(Some(seed));

    loop {
        writer.line(&format!("Starting round {}!", game.round()));
        let first = game.first_player();
        engine.play_round(game.players_mut(), first)?;

        for removed in game.remove_bankrupt() {
            writer.line(&format!(
                "{} is bankrupt and has been removed from the game!",
                removed
            ));
        }

        match game.status() {
            SessionStatus::HumanBankrupt => {
                writer.line("Oh No! You went bankrupt! Game over :(");
                break;
            }
            SessionStatus::LastPlayerStanding => {
                writer.line("Everyone else is out of chips. The table is yours!");
                break;
            }
            SessionStatus::Continue => {
                writer.line("");
                writer.prompt("Do you want to continue playing? (Y/N) ");
                if engine.io_mut().input.prompt_choice("Y", "N") != "Y" {
                    break;
                }
                writer.line("You have chosen to continue playing. Onto the next round!");
                writer.line("");
                game.advance();
            }
        }
    }

    if let Some(result) = game.human_result(config.starting_bank) {
        writer.line(&format_result(result));
    }
    info!(rounds = game.round(), "session finished");
    writer.finish()?;
    Ok(())
}
