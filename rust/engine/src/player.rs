use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// The two participants of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The interactive player (always acts first in a round)
    Human,
    /// The computer opponent
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Computer => "computer",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a side does with its turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Place a card from hand on the pile
    Play(Card),
    /// Take one card from the deck (or be blocked when it is empty)
    Draw,
    /// Name the new active suit after an eight
    Declare(Suit),
}

/// Number of cards each side receives when a round is dealt.
pub const HAND_SIZE: usize = 5;
