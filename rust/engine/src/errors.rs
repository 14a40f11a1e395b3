use thiserror::Error;

use crate::cards::{Card, ParseCardError, Suit};
use crate::player::Side;
use crate::round::{Phase, Trigger};

/// Broken preconditions inside the engine.
///
/// These indicate a driving-logic defect (card conservation is already
/// violated) and must be propagated, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot deal {requested} cards, only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Card {0} is not in hand")]
    CardNotInHand(Card),
    #[error("All rounds of this game have been played")]
    GameOver,
    #[error("Round {0} is not finished")]
    RoundNotFinished(u32),
    #[error("Card {0} is placed more than once")]
    DuplicateCard(Card),
    #[error("Round {0} was not dealt by this game")]
    ForeignRound(u32),
    #[error("Expected round {expected}, got round {actual}")]
    UnexpectedRound { expected: u32, actual: u32 },
    #[error("No transition from {from:?} on {trigger:?}")]
    InvalidTransition { from: Phase, trigger: Trigger },
    #[error("Multiplier {0} is outside 1..=3")]
    InvalidMultiplier(u32),
}

/// A move the round controller refused.
///
/// Everything except [`MoveError::Fatal`] is an input problem: the caller
/// reports the reason and asks again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("It is not {actual}'s turn (waiting for {expected})")]
    NotYourTurn { expected: Side, actual: Side },
    #[error("{0} must declare a suit first")]
    SuitChoicePending(Side),
    #[error("No suit declaration is pending")]
    NoSuitChoicePending,
    #[error("You do not hold {0}")]
    NotHeld(Card),
    #[error("{card} cannot be played on {up_card} (active suit {active_suit})")]
    IllegalPlay {
        card: Card,
        up_card: Card,
        active_suit: Suit,
    },
    #[error(transparent)]
    UnknownCard(#[from] ParseCardError),
    #[error("The round is over")]
    RoundOver,
    #[error(transparent)]
    Fatal(#[from] GameError),
}

impl MoveError {
    /// True for contract violations that must abort the game.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveError::Fatal(_))
    }
}
