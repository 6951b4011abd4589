//! `cfg`: prints every setting with the layer it came from.
//!
//! ```json
//! {
//!   "opponents": { "value": 4, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_bank": { "value": config.starting_bank, "source": sources.starting_bank },
        "min_opp_bankroll": { "value": config.min_opp_bankroll, "source": sources.min_opp_bankroll },
        "max_opp_bankroll": { "value": config.max_opp_bankroll, "source": sources.max_opp_bankroll },
        "opponents": { "value": config.opponents, "source": sources.opponents },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "decks": { "value": config.decks, "source": sources.decks },
        "ai_raise": { "value": config.ai_raise, "source": sources.ai_raise },
        "ai_bluff": { "value": config.ai_bluff, "source": sources.ai_bluff },
        "seed": { "value": config.seed, "source": sources.seed },
        "log_level": { "value": config.log_level, "source": sources.log_level },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
