//! # Sim Command
//!
//! Plays an all-computer table for a fixed number of rounds. After every
//! round the chips on the table are counted; any difference from the
//! starting total aborts the run. Optionally writes every [`RoundRecord`]
//! as one JSON line.
//!
//! `HOLDEM_SIM_BREAK_AFTER=N` stops the run after N rounds as if it had
//! been interrupted (exit code 130), keeping the records written so far.
//!
//! [`RoundRecord`]: holdem_engine::logger::RoundRecord

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use holdem_ai::create_ai;
use holdem_engine::engine::{BettingEngine, Collaborators, MIN_PLAYERS};
use holdem_engine::game::{GameState, SessionStatus};
use holdem_engine::io::{NoHumanInput, NullOutput};
use holdem_engine::rng::{RandomSource, SeededRandom};
use tracing::{debug, info};

use crate::commands::load_config;
use crate::error::CliError;
use crate::formatters::{format_names, format_standings};
use crate::io_utils::ensure_parent_dir;
use crate::roster::build_roster;
use crate::ui;

pub const BREAK_AFTER_ENV: &str = "HOLDEM_SIM_BREAK_AFTER";

pub fn handle_sim_command(
    rounds: u32,
    opponents: Option<usize>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(err)?.with_overrides(opponents, seed, None)?;
    if config.opponents < MIN_PLAYERS {
        let msg = format!("sim needs at least {} opponents", MIN_PLAYERS);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let mut records = match output.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            Some(BufWriter::new(File::create(path)?))
        }
        None => None,
    };

    let break_after = std::env::var(BREAK_AFTER_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok());
    let seed = config.seed.unwrap_or_else(rand::random);
    let policy = create_ai("holdem", config.ai_params())?;
    let (mut input, mut sink, mut rng) = (NoHumanInput, NullOutput, SeededRandom::new(seed));

    let players = build_roster(&config, None, &mut rng);
    let first = rng.pick(players.len());
    let mut game = GameState::new(players, first);
    let expected = game.total_chips();
    info!(seed, rounds, seats = game.players().len(), chips = expected, "simulation started");

    let io = Collaborators {
        input: &mut input,
        output: &mut sink,
        rng: &mut rng,
        policy: policy.as_ref(),
    };
    let mut engine = BettingEngine::new(config.table_rules(), io)?.with_seed(Some(seed));

    let mut played = 0u32;
    while played < rounds && game.status() == SessionStatus::Continue {
        let first = game.first_player();
        let record = engine.play_round(game.players_mut(), first)?;
        played += 1;

        let winners: Vec<&str> = record
            .winners
            .iter()
            .map(|&s| game.players()[s].name())
            .collect();
        writeln!(
            out,
            "Round {}: {} won, pot {}",
            record.round_id,
            format_names(&winners),
            record.pot
        )?;

        let total = game.total_chips();
        if total != expected {
            let msg = format!(
                "chip total changed in {}: expected {}, found {}",
                record.round_id, expected, total
            );
            ui::write_error(err, &msg)?;
            return Err(CliError::Engine(msg));
        }

        if let Some(w) = records.as_mut() {
            let line = record.to_json_line().map_err(std::io::Error::other)?;
            writeln!(w, "{}", line)?;
        }

        for removed in game.remove_bankrupt() {
            writeln!(out, "{} is bankrupt and has been removed from the game!", removed)?;
        }
        game.advance();
        debug!(played, seats = game.players().len(), "round finished");

        if let Some(b) = break_after
            && played == b
            && played < rounds
        {
            if let Some(w) = records.as_mut() {
                w.flush()?;
            }
            let msg = format!("saved {}/{}", played, rounds);
            writeln!(out, "Interrupted: {}", msg)?;
            return Err(CliError::Interrupted(msg));
        }
    }

    if let Some(mut w) = records {
        w.flush()?;
    }

    writeln!(out, "Simulated: {} rounds (seed {})", played, seed)?;
    if played < rounds {
        writeln!(out, "Stopped early: one player holds every chip")?;
    }
    writeln!(out, "Standings:")?;
    for line in format_standings(game.players()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
