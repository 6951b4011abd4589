//! Text shown around rounds: winners, standings, the final result.

use holdem_engine::game::SessionResult;
use holdem_engine::player::Player;

/// "A", "A and B", "A, B and C".
pub fn format_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// One line per seat, richest first.
pub fn format_standings(players: &[Player]) -> Vec<String> {
    let mut seats: Vec<&Player> = players.iter().collect();
    seats.sort_by(|a, b| b.bankroll().cmp(&a.bankroll()).then(a.name().cmp(b.name())));
    seats
        .into_iter()
        .map(|p| format!("  {:<16} ${}", p.name(), p.bankroll()))
        .collect()
}

pub fn format_result(result: SessionResult) -> String {
    match result {
        SessionResult::Profit(x) => format!("Congrats! You made ${}!", x),
        SessionResult::BrokeEven => "You broke even!".to_string(),
        SessionResult::Loss(x) => format!("Unfortunately, you lost ${} :(", x),
    }
}
