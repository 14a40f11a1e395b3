//! # eights-ai: computer opponents for Crazy Eights
//!
//! Decision policies for the computer side, plus a driver that turns a
//! decision into engine actions.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait every policy implements
//! - [`baseline`] - The canonical heuristic opponent
//! - [`random`] - Uniformly random legal play, for simulations
//! - [`create_ai`] - Factory building an opponent by name
//! - [`play_turn`] - Runs one full computer turn against a [`Round`]
//!
//! ## Quick Start
//!
//! ```rust
//! use eights_ai::{create_ai, play_turn};
//! use eights_engine::player::Side;
//! use eights_engine::round::Round;
//!
//! let ai = create_ai("baseline", 0).expect("known AI");
//! let mut round = Round::deal(1, 42).expect("deal");
//! round.draw(Side::Human).expect("human may always draw");
//!
//! let turns = play_turn(ai.as_ref(), &mut round, Side::Computer).expect("legal turn");
//! assert!(!turns.is_empty());
//! assert_ne!(round.to_act(), Some(Side::Computer));
//! ```

use eights_engine::cards::{Card, Suit};
use eights_engine::errors::MoveError;
use eights_engine::hand::Hand;
use eights_engine::player::Side;
use eights_engine::round::{Phase, Round, Turn};
use tracing::debug;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["baseline", "random"];

/// Decision interface for a computer player.
///
/// Implementations only decide; [`play_turn`] applies the decisions.
///
/// # Example Implementation
///
/// ```rust
/// use eights_ai::Opponent;
/// use eights_engine::cards::{Card, Suit};
/// use eights_engine::hand::Hand;
///
/// struct AlwaysDraw;
///
/// impl Opponent for AlwaysDraw {
///     fn choose_card(&self, _hand: &Hand, _up: Card, _suit: Suit) -> Option<Card> {
///         None
///     }
///
///     fn choose_suit(&self, _hand: &Hand) -> Suit {
///         Suit::Spades
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysDraw"
///     }
/// }
/// ```
pub trait Opponent: Send + Sync {
    /// Card to play on `up_card` with `active_suit` in force, or `None` to draw.
    ///
    /// A returned card must be legal; [`play_turn`] surfaces an illegal pick
    /// as a rejected move.
    fn choose_card(&self, hand: &Hand, up_card: Card, active_suit: Suit) -> Option<Card>;

    /// Suit to name after playing an eight. `hand` is the hand without the eight.
    fn choose_suit(&self, hand: &Hand) -> Suit;

    fn name(&self) -> &str;
}

/// Builds an opponent by name. `seed` only matters for `"random"`.
///
/// ```rust
/// use eights_ai::create_ai;
///
/// assert_eq!(create_ai("baseline", 0).unwrap().name(), "BaselineAI");
/// assert!(create_ai("oracle", 0).is_err());
/// ```
pub fn create_ai(name: &str, seed: u64) -> Result<Box<dyn Opponent>, String> {
    match name {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        "random" => Ok(Box::new(random::RandomAI::new(seed))),
        other => Err(format!(
            "Unknown AI type: {other} (expected one of: {})",
            AI_NAMES.join(", ")
        )),
    }
}

/// Plays one whole turn for `side`: a card or a draw, then the suit
/// declaration when the card was an eight that did not end the round.
///
/// Returns the accepted turns in order (one or two).
pub fn play_turn(ai: &dyn Opponent, round: &mut Round, side: Side) -> Result<Vec<Turn>, MoveError> {
    let mut turns = Vec::with_capacity(2);

    if round.phase() != Phase::ChooseSuit(side) {
        let hand = round.hand(side);
        let turn = match ai.choose_card(hand, round.up_card(), round.active_suit()) {
            Some(card) => round.play(side, card)?,
            None => round.draw(side)?,
        };
        debug!(ai = ai.name(), %side, action = ?turn.action, "ai move");
        turns.push(turn);
    }

    if round.phase() == Phase::ChooseSuit(side) {
        let suit = ai.choose_suit(round.hand(side));
        turns.push(round.declare_suit(side, suit)?);
    }

    Ok(turns)
}
