//! Parsing of everything the user types: prompt answers and card lists.

use holdem_engine::cards::Card;
use holdem_engine::hand::{MAX_SCORED_CARDS, MIN_SCORED_CARDS};

/// Matches `input` against the two allowed answers, ignoring case.
/// Returns the option as it was offered.
pub fn parse_choice<'o>(input: &str, option_a: &'o str, option_b: &'o str) -> Option<&'o str> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(option_a) {
        Some(option_a)
    } else if input.eq_ignore_ascii_case(option_b) {
        Some(option_b)
    } else {
        None
    }
}

/// Why an integer answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerError {
    NotANumber,
    TooLarge,
}

/// Parses a whole number in `0..=max_inclusive`.
pub fn parse_bounded_integer(input: &str, max_inclusive: u32) -> Result<u32, IntegerError> {
    let value: u32 = input.trim().parse().map_err(|_| IntegerError::NotANumber)?;
    if value > max_inclusive {
        return Err(IntegerError::TooLarge);
    }
    Ok(value)
}

/// Parses 2 to 7 short-form cards ("AS", "10h", "td").
pub fn parse_cards<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Card>, String> {
    if !(MIN_SCORED_CARDS..=MAX_SCORED_CARDS).contains(&raw.len()) {
        return Err(format!(
            "expected between {} and {} cards, got {}",
            MIN_SCORED_CARDS,
            MAX_SCORED_CARDS,
            raw.len()
        ));
    }
    let cards = raw
        .iter()
        .map(|s| s.as_ref().parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(format!("card {} given twice", c.short()));
        }
    }
    Ok(cards)
}
