use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::hand::Hand;
use crate::player::Side;

/// Decides whether `card` may be placed on `up_card` while `active_suit` is
/// in force.
///
/// Eights are always playable. Otherwise the card must follow the active suit
/// or match the up-card's rank or natural suit.
///
/// # Examples
///
/// ```
/// use eights_engine::cards::{Card, Rank, Suit};
/// use eights_engine::rules::can_play;
///
/// let up = Card::new(Suit::Spades, Rank::Five);
/// assert!(can_play(Card::new(Suit::Hearts, Rank::Eight), up, Suit::Spades));
/// assert!(can_play(Card::new(Suit::Hearts, Rank::Five), up, Suit::Spades));
/// assert!(!can_play(Card::new(Suit::Diamonds, Rank::Three), up, Suit::Spades));
/// ```
pub fn can_play(card: Card, up_card: Card, active_suit: Suit) -> bool {
    if card.is_eight() {
        return true;
    }
    card.suit == active_suit || card.rank == up_card.rank || card.suit == up_card.suit
}

/// How a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The given side emptied its hand
    Out(Side),
    /// Both sides failed to play in succession with an empty deck
    Blocked,
}

/// Points awarded when a round ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundScore {
    pub end: RoundEnd,
    pub human: u32,
    pub computer: u32,
}

impl RoundScore {
    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.end {
            RoundEnd::Out(side) => Some(side),
            RoundEnd::Blocked => None,
        }
    }
}

/// Scores a finished round.
///
/// The side that went out scores the value left in the opponent's hand. A
/// blocked round credits each side with the value of the opposing hand.
pub fn score_round(end: RoundEnd, human: &Hand, computer: &Hand) -> RoundScore {
    let (h, c) = match end {
        RoundEnd::Out(Side::Human) => (computer.value(), 0),
        RoundEnd::Out(Side::Computer) => (0, human.value()),
        RoundEnd::Blocked => (computer.value(), human.value()),
    };
    RoundScore {
        end,
        human: h,
        computer: c,
    }
}
