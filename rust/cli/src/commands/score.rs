//! `score`: evaluates a handful of cards outside of any game.

use std::io::Write;

use holdem_engine::cards::format_cards;
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::ui;
use crate::validation::parse_cards;

pub fn handle_score_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_cards(cards) {
        Ok(c) => c,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let score = evaluate(&cards)?;
    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Score: {:.8}", score.value())?;
    writeln!(out, "Hand: {}", score.label())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cards: &[&str]) -> (Result<(), CliError>, String, String) {
        let cards: Vec<String> = cards.iter().map(|s| s.to_string()).collect();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let res = handle_score_command(&cards, &mut out, &mut err);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn royal_flush() {
        let (res, out, _) = run(&["AS", "KS", "QS", "JS", "TS"]);
        assert!(res.is_ok());
        assert!(out.contains("Score: 134.00000000"));
        assert!(out.contains("Ace of Spades"));
    }

    #[test]
    fn bad_card_is_reported() {
        let (res, out, err) = run(&["AS", "1X"]);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
        assert!(err.starts_with("Error: "));
    }
}
