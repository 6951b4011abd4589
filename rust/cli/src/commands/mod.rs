//! Command handlers for the `holdem` binary.
//!
//! Every handler has the shape
//! `handle_COMMAND_command(..., out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError>`;
//! streams are injected so tests can drive them with in-memory buffers.

pub mod cfg;
pub mod play;
pub mod score;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use score::handle_score_command;
pub use sim::handle_sim_command;

use std::io::Write;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::logging::init_logging;
use crate::ui;

/// Resolves the configuration and installs logging at its level.
pub(crate) fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load_with_sources() {
        Ok(resolved) => {
            // a subscriber from an earlier command stays in place
            let _ = init_logging(&resolved.config.log_level);
            Ok(resolved.config)
        }
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Err(e.into())
        }
    }
}
