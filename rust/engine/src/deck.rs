use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Draw pile for one round. The top of the deck is the end of the vector.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep generation order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Deck holding exactly `cards`; the last card is the top.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Uniform in-place permutation of whatever cards remain.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes `n` cards from the top.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientCards`] when fewer than `n` cards remain; the
    /// deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// Takes the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns a card to the bottom of the deck.
    pub fn add_back(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order (next draw first).
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
