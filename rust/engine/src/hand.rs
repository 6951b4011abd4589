use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{format_cards, Card, Rank};
use crate::errors::GameError;

/// Fewest cards a hand can be scored with (an opening hand).
pub const MIN_SCORED_CARDS: usize = 2;
/// Opening hand plus a full board.
pub const MAX_SCORED_CARDS: usize = 7;
/// Cards that make up a ranked poker hand.
pub const HAND_SIZE: usize = 5;
/// Score of an ace-high straight flush.
pub const ROYAL_FLUSH_SCORE: f64 = 134.0;

// Positional kicker weight: rank / 100^position. A rank is at most 14, so one
// step up in any position outweighs everything after it.
const KICKER_BASE: f64 = 100.0;

/// Hand categories, weakest first. Each owns a disjoint score band starting at
/// [`Category::base`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    pub fn base(self) -> f64 {
        match self {
            Category::HighCard => 0.0,
            Category::OnePair => 15.0,
            Category::TwoPair => 30.0,
            Category::ThreeOfAKind => 45.0,
            Category::Straight => 60.0,
            Category::Flush => 75.0,
            Category::FullHouse => 90.0,
            Category::FourOfAKind => 105.0,
            Category::StraightFlush | Category::RoyalFlush => 120.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush!!!",
            Category::StraightFlush => "Straight Flush!",
            Category::FourOfAKind => "Four of a Kind!",
            Category::FullHouse => "Full House!",
            Category::Flush => "Flush!",
            Category::Straight => "Straight!",
            Category::ThreeOfAKind => "Three of a Kind!",
            Category::TwoPair => "Two Pair!",
            Category::OnePair => "Two of a Kind!",
            Category::HighCard => "High Card",
        }
    }

    /// Maps a score back onto its band. Band floors are exclusive, and the
    /// royal flush is the single score 134.
    pub fn from_score(score: f64) -> Category {
        if score == ROYAL_FLUSH_SCORE {
            Category::RoyalFlush
        } else if score > 120.0 {
            Category::StraightFlush
        } else if score > 105.0 {
            Category::FourOfAKind
        } else if score > 90.0 {
            Category::FullHouse
        } else if score > 75.0 {
            Category::Flush
        } else if score > 60.0 {
            Category::Straight
        } else if score > 45.0 {
            Category::ThreeOfAKind
        } else if score > 30.0 {
            Category::TwoPair
        } else if score > 15.0 {
            Category::OnePair
        } else {
            Category::HighCard
        }
    }
}

/// Label for a raw score, e.g. `"Full House!"`.
pub fn best_hand_label(score: f64) -> &'static str {
    Category::from_score(score).label()
}

/// Totally ordered hand strength; higher is stronger.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct HandScore(f64);

impl HandScore {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn category(self) -> Category {
        Category::from_score(self.0)
    }

    pub fn label(self) -> &'static str {
        self.category().label()
    }
}

impl PartialEq for HandScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandScore {}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}

/// Scores a loose collection of 2..=7 cards.
pub fn evaluate(cards: &[Card]) -> Result<HandScore, GameError> {
    let mut hand = Hand::new();
    hand.add_all(cards);
    hand.score()
}

/// The cards one participant can use: the two private cards followed by
/// whatever community cards have been revealed.
///
/// A per-rank frequency table is maintained alongside the cards; `add` and
/// `remove` keep the two in step, so lookahead code must pair them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    // index = rank value (2..=14)
    rank_counts: [u8; 15],
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.rank_counts[card.rank.value() as usize] += 1;
    }

    pub fn add_all(&mut self, cards: &[Card]) {
        for &c in cards {
            self.add(c);
        }
    }

    /// Removes the most recently added copy of `card`.
    pub fn remove(&mut self, card: Card) -> Result<(), GameError> {
        let idx = self
            .cards
            .iter()
            .rposition(|&c| c == card)
            .ok_or_else(|| GameError::CardNotInHand(card.to_string()))?;
        self.cards.remove(idx);
        self.rank_counts[card.rank.value() as usize] -= 1;
        Ok(())
    }

    pub fn remove_all(&mut self, cards: &[Card]) -> Result<(), GameError> {
        for &c in cards.iter().rev() {
            self.remove(c)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.rank_counts = [0; 15];
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The two private cards, higher rank first.
    pub fn opening_hand(&self) -> Option<[Card; 2]> {
        match self.cards.as_slice() {
            [a, b, ..] if a.rank >= b.rank => Some([*a, *b]),
            [a, b, ..] => Some([*b, *a]),
            _ => None,
        }
    }

    /// Rank frequencies, highest rank first, omitting absent ranks.
    pub fn rank_frequencies(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        (2..=14u8).rev().filter_map(move |r| {
            let n = self.rank_counts[r as usize];
            Rank::from_u8(r).filter(|_| n > 0).map(|rank| (rank, n))
        })
    }

    pub fn score(&self) -> Result<HandScore, GameError> {
        let n = self.cards.len();
        if !(MIN_SCORED_CARDS..=MAX_SCORED_CARDS).contains(&n) {
            return Err(GameError::InvalidHandSize(n));
        }
        let mut sorted = self.cards.clone();
        sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
        Ok(HandScore(score_sorted(&sorted, &self.rank_counts)))
    }

    pub fn best_hand(&self) -> Result<&'static str, GameError> {
        self.score().map(HandScore::label)
    }
}

impl fmt::Display for Hand {
    /// Shows the opening hand only; community cards are public.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opening_hand() {
            Some(pair) => write!(f, "{}", format_cards(&pair)),
            None => write!(f, "{}", format_cards(&self.cards)),
        }
    }
}

// `sorted` is descending by rank; `counts` indexes by rank value.
fn score_sorted(sorted: &[Card], counts: &[u8; 15]) -> f64 {
    if let Some(high) = straight_flush_high(sorted) {
        return Category::StraightFlush.base() + high as f64;
    }

    if let Some(quad) = duplicates(counts, 4, None) {
        return Category::FourOfAKind.base() + quad as f64 + kickers(sorted, quad, 1);
    }

    let trips = duplicates(counts, 3, None);
    if let Some(trip) = trips {
        if let Some(pair) = duplicates(counts, 2, Some(trip)) {
            return Category::FullHouse.base() + trip as f64 + pair as f64 / KICKER_BASE;
        }
    }

    if let Some(suit) = flush_suit(sorted) {
        let ranks = sorted
            .iter()
            .filter(|c| c.suit.index() == suit)
            .map(|c| c.rank.value());
        return Category::Flush.base() + weighted(ranks, HAND_SIZE);
    }

    let mut present = [false; 15];
    for c in sorted {
        present[c.rank.value() as usize] = true;
    }
    if let Some(high) = straight_high(&present) {
        return Category::Straight.base() + high as f64;
    }

    if let Some(trip) = trips {
        return Category::ThreeOfAKind.base() + trip as f64 + kickers(sorted, trip, HAND_SIZE - 3);
    }

    if let Some((high, low, kicker)) = two_pair(counts) {
        return Category::TwoPair.base()
            + high as f64
            + low as f64 / KICKER_BASE
            + kicker as f64 / (KICKER_BASE * KICKER_BASE);
    }

    if let Some(pair) = duplicates(counts, 2, None) {
        return Category::OnePair.base() + pair as f64 + kickers(sorted, pair, HAND_SIZE - 2);
    }

    weighted(sorted.iter().map(|c| c.rank.value()), HAND_SIZE)
}

/// Highest rank held exactly `n` times, skipping `excluded`.
fn duplicates(counts: &[u8; 15], n: u8, excluded: Option<u8>) -> Option<u8> {
    (2..=14u8)
        .rev()
        .find(|&r| Some(r) != excluded && counts[r as usize] == n)
}

/// (high pair, low pair, highest unpaired rank) when two ranks are paired.
/// A third pair never plays as the kicker.
fn two_pair(counts: &[u8; 15]) -> Option<(u8, u8, u8)> {
    let mut pairs = (2..=14u8).rev().filter(|&r| counts[r as usize] >= 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != high && r != low && counts[r as usize] == 1)
        .unwrap_or(0);
    Some((high, low, kicker))
}

/// Weighted sum of the `take` highest cards not of rank `excluded`.
fn kickers(sorted: &[Card], excluded: u8, take: usize) -> f64 {
    weighted(
        sorted
            .iter()
            .map(|c| c.rank.value())
            .filter(|&r| r != excluded),
        take,
    )
}

fn weighted(ranks: impl Iterator<Item = u8>, take: usize) -> f64 {
    let mut score = 0.0;
    let mut weight = 1.0;
    for r in ranks.take(take) {
        weight /= KICKER_BASE;
        score += r as f64 * weight;
    }
    score
}

fn flush_suit(cards: &[Card]) -> Option<usize> {
    let mut suit_counts = [0usize; 4];
    for c in cards {
        suit_counts[c.suit.index()] += 1;
    }
    // With a multi-deck shoe two suits could qualify; prefer the longer one.
    (0..4)
        .filter(|&s| suit_counts[s] >= HAND_SIZE)
        .max_by_key(|&s| suit_counts[s])
}

/// High card of the best run of five consecutive ranks. Aces play high only.
fn straight_high(present: &[bool; 15]) -> Option<u8> {
    let mut run = 0;
    for r in (2..=14u8).rev() {
        if present[r as usize] {
            run += 1;
            if run == HAND_SIZE {
                return Some(r + HAND_SIZE as u8 - 1);
            }
        } else {
            run = 0;
        }
    }
    None
}

fn straight_flush_high(cards: &[Card]) -> Option<u8> {
    let mut by_suit = [[false; 15]; 4];
    for c in cards {
        by_suit[c.suit.index()][c.rank.value() as usize] = true;
    }
    by_suit.iter().filter_map(straight_high).max()
}
