use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::GameError;
use crate::rules::can_play;

/// Cards held by one side. Insertion order is kept and defines "hand order"
/// for every query that returns a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
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

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes `card`, keeping the order of the remaining cards.
    ///
    /// # Errors
    ///
    /// [`GameError::CardNotInHand`] if the card is not held. Callers check
    /// legality first, so this signals a bug in the caller.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, GameError> {
        let idx = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::CardNotInHand(card))?;
        Ok(self.cards.remove(idx))
    }

    /// Cards that may legally go on `up_card` under `active_suit`, in hand order.
    pub fn playable_cards(&self, up_card: Card, active_suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|&c| can_play(c, up_card, active_suit))
            .collect()
    }

    pub fn has_playable(&self, up_card: Card, active_suit: Suit) -> bool {
        self.cards
            .iter()
            .any(|&c| can_play(c, up_card, active_suit))
    }

    /// Sum of card points; what the opponent scores if this hand is caught.
    pub fn value(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    /// Looks a card up by its short name (`8H`), case-insensitively.
    pub fn find(&self, short_name: &str) -> Option<Card> {
        let wanted: Card = short_name.parse().ok()?;
        self.cards.iter().copied().find(|&c| c == wanted)
    }

    /// Number of held cards per suit, indexed in enumeration order.
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for c in &self.cards {
            counts[c.suit as usize] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn playable_cards_keeps_hand_order() {
        let hand = Hand::from_cards(vec![c("8H"), c("3D")]);
        assert_eq!(hand.playable_cards(c("5S"), Suit::Spades), vec![c("8H")]);

        let hand = Hand::from_cards(vec![c("KS"), c("5D"), c("2S"), c("9H")]);
        assert_eq!(
            hand.playable_cards(c("5S"), Suit::Spades),
            vec![c("KS"), c("5D"), c("2S")]
        );
    }

    #[test]
    fn remove_missing_card_is_an_error() {
        let mut hand = Hand::from_cards(vec![c("2C")]);
        assert_eq!(
            hand.remove_card(c("3C")),
            Err(GameError::CardNotInHand(c("3C")))
        );
        assert_eq!(hand.remove_card(c("2C")), Ok(c("2C")));
        assert!(hand.is_empty());
    }

    #[test]
    fn value_sums_points() {
        let hand = Hand::from_cards(vec![c("8C"), c("KD"), c("AS"), c("4H")]);
        assert_eq!(hand.value(), 50 + 10 + 1 + 4);
        assert_eq!(Hand::new().value(), 0);
    }

    #[test]
    fn find_by_short_name() {
        let hand = Hand::from_cards(vec![Card::new(Suit::Diamonds, Rank::Ten)]);
        assert_eq!(hand.find("10d"), Some(c("10D")));
        assert_eq!(hand.find("9d"), None);
        assert_eq!(hand.find("zz"), None);
    }

    #[test]
    fn suit_counts_follow_enumeration_order() {
        let hand = Hand::from_cards(vec![c("2C"), c("3C"), c("4H")]);
        assert_eq!(hand.suit_counts(), [0, 1, 0, 2]);
    }
}
