//! Deal command: deals one round and shows everything, including the
//! computer's hand. Useful for checking what a seed produces.

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use eights_engine::player::Side;
use eights_engine::round::Round;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let round = Round::deal(1, seed)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Human: {}", format_hand(round.hand(Side::Human).cards()))?;
    writeln!(
        out,
        "Computer: {}",
        format_hand(round.hand(Side::Computer).cards())
    )?;
    writeln!(
        out,
        "Up-card: {} (active suit {})",
        format_card(&round.up_card()),
        round.active_suit()
    )?;
    writeln!(out, "Deck: {} card(s)", round.deck_remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Human: ["));
        assert!(output.contains("Computer: ["));
        assert!(output.contains("Up-card:"));
        assert!(output.contains("Deck: 41 card(s)"));
    }

    #[test]
    fn test_deal_is_deterministic_with_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(2024), &mut a).unwrap();
        handle_deal_command(Some(2024), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
    }
}
