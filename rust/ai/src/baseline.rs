//! Baseline heuristic opponent.
//!
//! No search and no lookahead: every decision looks only at the current hand
//! and table. The free functions are the policy; [`BaselineAI`] wraps them
//! in the [`Opponent`] interface.

use crate::Opponent;
use eights_engine::cards::{all_suits, Card, Suit};
use eights_engine::hand::Hand;

/// Picks the card to play, or `None` when the hand has nothing legal and the
/// side must draw.
///
/// The first playable eight in hand order wins; otherwise the playable card
/// with the most points, ties going to the earlier card.
///
/// # Example
///
/// ```rust
/// use eights_ai::baseline::choose_card;
/// use eights_engine::cards::{Card, Suit};
/// use eights_engine::hand::Hand;
///
/// let c = |s: &str| s.parse::<Card>().unwrap();
/// let hand = Hand::from_cards(vec![c("2S"), c("KS"), c("QS")]);
/// assert_eq!(choose_card(&hand, c("5S"), Suit::Spades), Some(c("KS")));
/// ```
pub fn choose_card(hand: &Hand, up_card: Card, active_suit: Suit) -> Option<Card> {
    let playable = hand.playable_cards(up_card, active_suit);
    if let Some(&eight) = playable.iter().find(|c| c.is_eight()) {
        return Some(eight);
    }
    // max_by_key keeps the last maximum, so fold to keep the first one
    playable.into_iter().fold(None, |best: Option<Card>, c| match best {
        Some(b) if b.points() >= c.points() => Some(b),
        _ => Some(c),
    })
}

/// Most common suit in the hand; ties go to the earlier suit in
/// Diamonds, Hearts, Spades, Clubs order, and an empty hand names Diamonds.
pub fn choose_suit(hand: &Hand) -> Suit {
    let counts = hand.suit_counts();
    let mut best = Suit::Diamonds;
    let mut best_count = 0;
    for (suit, &count) in all_suits().iter().zip(counts.iter()) {
        if count > best_count {
            best = *suit;
            best_count = count;
        }
    }
    best
}

/// True exactly when [`choose_card`] would return `None`.
pub fn should_draw(hand: &Hand, up_card: Card, active_suit: Suit) -> bool {
    !hand.has_playable(up_card, active_suit)
}

/// The canonical computer opponent.
///
/// # Example
///
/// ```rust
/// use eights_ai::baseline::BaselineAI;
/// use eights_ai::Opponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for BaselineAI {
    fn choose_card(&self, hand: &Hand, up_card: Card, active_suit: Suit) -> Option<Card> {
        choose_card(hand, up_card, active_suit)
    }

    fn choose_suit(&self, hand: &Hand) -> Suit {
        choose_suit(hand)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
