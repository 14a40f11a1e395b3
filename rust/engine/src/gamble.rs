//! Post-game multiplier gamble.
//!
//! House rule, off unless a caller opts in: after the last round the trailing
//! side multiplies its own total by 1, 2 or 3. The human picks the multiplier;
//! the computer's is drawn at random.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::Scores;
use crate::player::Side;

pub const MULTIPLIERS: std::ops::RangeInclusive<u32> = 1..=3;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GambleResult {
    pub side: Side,
    pub multiplier: u32,
    pub before: u32,
    pub after: u32,
}

pub fn computer_multiplier<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(MULTIPLIERS)
}

/// Multiplies `side`'s total in place.
pub fn apply(scores: &mut Scores, side: Side, multiplier: u32) -> Result<GambleResult, GameError> {
    if !MULTIPLIERS.contains(&multiplier) {
        return Err(GameError::InvalidMultiplier(multiplier));
    }
    let total = scores.for_side_mut(side);
    let before = *total;
    *total = before.saturating_mul(multiplier);
    Ok(GambleResult {
        side,
        multiplier,
        before,
        after: *total,
    })
}
