use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::rng::RandomSource;

/// A shoe of `num_decks` standard decks, consumed from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Builds an unshuffled shoe. `num_decks` of zero is treated as one.
    pub fn new(num_decks: usize) -> Self {
        let num_decks = num_decks.max(1);
        let mut cards = Vec::with_capacity(52 * num_decks);
        for _ in 0..num_decks {
            cards.extend(full_deck());
        }
        Self { cards, position: 0 }
    }

    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        // Only undealt cards are shuffled; a fresh deck shuffles all of them.
        rng.shuffle(&mut self.cards[self.position..]);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn burn(&mut self, n: usize) -> Result<(), GameError> {
        if self.remaining() < n {
            return Err(GameError::DeckExhausted);
        }
        self.position += n;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Undealt cards, next card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
