//! Seats a table of computer opponents around the human player.

use holdem_engine::player::Player;
use holdem_engine::rng::RandomSource;

use crate::config::Config;

pub const NAMES: [&str; 32] = [
    "Anne", "Antonio", "Barry", "Bobby", "Brian", "Carlos", "Chad", "Chris", "Dan", "Darrell",
    "Dave", "Erick", "E-Dog", "Greg", "Howard", "Hoyt", "Humberto", "Jack", "Jimmy", "John",
    "Kenny", "Lady Linda", "Marcel", "Mike", "Paul", "Phil", "Randy", "Scott", "Stu", "Tommy",
    "Viktor", "Walter",
];

/// Draws `config.opponents` distinct names and seats them with
/// `starting_bank`. One opponent becomes the short stack ("Lil' ...") and,
/// when there are at least two, a different one the big stack ("Big ...").
/// The human, if any, sits last.
pub fn build_roster(config: &Config, human: Option<&str>, rng: &mut dyn RandomSource) -> Vec<Player> {
    let count = config.opponents.min(NAMES.len());
    let mut pool: Vec<&str> = NAMES.to_vec();
    let mut players: Vec<Player> = (0..count)
        .map(|_| {
            let name = pool.swap_remove(rng.pick(pool.len()));
            Player::new(name, config.starting_bank, false)
        })
        .collect();

    if !players.is_empty() {
        let lil = rng.pick(players.len());
        let seat = &mut players[lil];
        let name = format!("Lil' {}", seat.name());
        seat.set_name(name);
        seat.set_bankroll(config.min_opp_bankroll);

        if players.len() >= 2 {
            // any seat but the short stack
            let mut big = rng.pick(players.len() - 1);
            if big >= lil {
                big += 1;
            }
            let seat = &mut players[big];
            let name = format!("Big {}", seat.name());
            seat.set_name(name);
            seat.set_bankroll(config.max_opp_bankroll);
        }
    }

    if let Some(name) = human {
        players.push(Player::new(name, config.starting_bank, true));
    }
    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::rng::SeededRandom;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_stacks_are_set() {
        let config = Config {
            opponents: 9,
            ..Config::default()
        };
        let mut rng = SeededRandom::new(11);
        let players = build_roster(&config, Some("Ada"), &mut rng);
        assert_eq!(players.len(), 10);

        let names: HashSet<&str> = players.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), 10);

        let human = players.last().unwrap();
        assert!(human.is_human());
        assert_eq!((human.name(), human.bankroll()), ("Ada", 100));

        let lil: Vec<&Player> = players.iter().filter(|p| p.name().starts_with("Lil' ")).collect();
        let big: Vec<&Player> = players.iter().filter(|p| p.name().starts_with("Big ")).collect();
        assert_eq!(lil.len(), 1);
        assert_eq!(big.len(), 1);
        assert_eq!(lil[0].bankroll(), 80);
        assert_eq!(big[0].bankroll(), 120);
        assert_eq!(players.iter().filter(|p| p.bankroll() == 100).count(), 8);
    }

    #[test]
    fn single_opponent_is_only_the_short_stack() {
        let config = Config {
            opponents: 1,
            ..Config::default()
        };
        let mut rng = SeededRandom::new(3);
        let players = build_roster(&config, None, &mut rng);
        assert_eq!(players.len(), 1);
        assert!(players[0].name().starts_with("Lil' "));
        assert_eq!(players[0].bankroll(), 80);
    }

    #[test]
    fn same_seed_same_table() {
        let config = Config::default();
        let a = build_roster(&config, Some("You"), &mut SeededRandom::new(5));
        let b = build_roster(&config, Some("You"), &mut SeededRandom::new(5));
        let names = |ps: &[Player]| ps.iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }
}
