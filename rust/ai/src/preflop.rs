//! Pre-flop lookup table: what to do with every opening hand.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use holdem_engine::cards::{Card, Rank};

use crate::PolicyError;

/// A pre-flop recommendation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Decision {
    Raise,
    Call,
    Fold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decision::Raise => "RAISE",
            Decision::Call => "CALL",
            Decision::Fold => "FOLD",
        };
        f.write_str(s)
    }
}

/// One row of the table: high rank, low rank, then the suited and offsuit
/// decisions.
pub type Entry = (u8, u8, Decision, Decision);

/// Every distinct pair of ranks.
pub const ENTRY_COUNT: usize = 91;

use Decision::{Call as C, Fold as F, Raise as R};

#[rustfmt::skip]
const STANDARD_ENTRIES: [Entry; ENTRY_COUNT] = [
    (14, 14, R, R), (14, 13, R, R), (14, 12, R, R), (14, 11, R, R), (14, 10, R, R),
    (14, 9, C, C), (14, 8, C, C), (14, 7, C, C), (14, 6, C, F), (14, 5, C, F),
    (14, 4, C, F), (14, 3, C, F), (14, 2, C, F),
    (13, 13, R, R), (13, 12, R, R), (13, 11, R, R), (13, 10, R, C), (13, 9, C, C),
    (13, 8, C, F), (13, 7, C, F), (13, 6, C, F), (13, 5, C, F), (13, 4, C, F),
    (13, 3, C, F), (13, 2, C, F),
    (12, 12, R, R), (12, 11, R, C), (12, 10, R, C), (12, 9, C, C), (12, 8, C, F),
    (12, 7, F, F), (12, 6, F, F), (12, 5, F, F), (12, 4, F, F), (12, 3, F, F),
    (12, 2, F, F),
    (11, 11, R, R), (11, 10, R, C), (11, 9, R, C), (11, 8, C, C), (11, 7, C, F),
    (11, 6, F, F), (11, 5, F, F), (11, 4, F, F), (11, 3, F, F), (11, 2, F, F),
    (10, 10, R, R), (10, 9, R, C), (10, 8, C, C), (10, 7, C, F), (10, 6, F, F),
    (10, 5, F, F), (10, 4, F, F), (10, 3, F, F), (10, 2, F, F),
    (9, 9, R, R), (9, 8, C, C), (9, 7, C, C), (9, 6, C, F), (9, 5, F, F),
    (9, 4, F, F), (9, 3, F, F), (9, 2, F, F),
    (8, 8, R, R), (8, 7, C, C), (8, 6, C, F), (8, 5, F, F), (8, 4, F, F),
    (8, 3, F, F), (8, 2, F, F),
    (7, 7, R, R), (7, 6, C, F), (7, 5, C, F), (7, 4, F, F), (7, 3, F, F),
    (7, 2, F, F),
    (6, 6, C, C), (6, 5, C, F), (6, 4, F, F), (6, 3, F, F), (6, 2, F, F),
    (5, 5, C, C), (5, 4, C, F), (5, 3, F, F), (5, 2, F, F),
    (4, 4, C, C), (4, 3, F, F), (4, 2, F, F),
    (3, 3, C, C), (3, 2, F, F),
    (2, 2, C, C),
];

static STANDARD: LazyLock<PreflopPolicyTable> =
    LazyLock::new(|| PreflopPolicyTable::build(&STANDARD_ENTRIES));

/// Immutable map from an opening hand's (high, low) ranks to its
/// `[suited, offsuit]` decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflopPolicyTable {
    entries: HashMap<(Rank, Rank), [Decision; 2]>,
}

impl PreflopPolicyTable {
    /// The built-in table, shared for the life of the process.
    pub fn standard() -> &'static PreflopPolicyTable {
        &STANDARD
    }

    /// Builds a table from custom rows, rejecting anything that does not
    /// cover each of the 91 rank pairs exactly once.
    pub fn from_entries(rows: &[Entry]) -> Result<Self, PolicyError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for &(high, low, _, _) in rows {
            let pair = match (Rank::from_u8(high), Rank::from_u8(low)) {
                (Some(h), Some(l)) if h >= l => (h, l),
                _ => return Err(PolicyError::InvalidEntry { high, low }),
            };
            if !seen.insert(pair) {
                return Err(PolicyError::DuplicateEntry { high, low });
            }
        }
        if seen.len() != ENTRY_COUNT {
            return Err(PolicyError::IncompleteTable {
                expected: ENTRY_COUNT,
                actual: seen.len(),
            });
        }
        Ok(Self::build(rows))
    }

    fn build(rows: &[Entry]) -> Self {
        let entries = rows
            .iter()
            .filter_map(|&(high, low, suited, offsuit)| {
                Some((
                    (Rank::from_u8(high)?, Rank::from_u8(low)?),
                    [suited, offsuit],
                ))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decision for two ranks in either order.
    pub fn lookup(&self, a: Rank, b: Rank, suited: bool) -> Option<Decision> {
        let key = if a >= b { (a, b) } else { (b, a) };
        self.entries
            .get(&key)
            .map(|pair| if suited { pair[0] } else { pair[1] })
    }

    pub fn decide(&self, opening: [Card; 2]) -> Option<Decision> {
        let [a, b] = opening;
        self.lookup(a.rank, b.rank, a.suit == b.suit)
    }
}
