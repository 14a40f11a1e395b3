use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four suits of a standard 52-card deck.
///
/// Declaration order is the fixed enumeration order used for deck generation
/// and for breaking ties when the computer picks a suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds (♦)
    Diamonds,
    /// Hearts (♥)
    Hearts,
    /// Spades (♠)
    Spades,
    /// Clubs (♣)
    Clubs,
}

impl Suit {
    /// Single-letter code used in short card names (`D`, `H`, `S`, `C`).
    pub fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of a card, Ace (low) through King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1 point)
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    /// Eight, the wild rank (50 points)
    Eight,
    Nine,
    Ten,
    /// Jack (10 points)
    Jack,
    /// Queen (10 points)
    Queen,
    /// King (10 points)
    King,
}

impl Rank {
    /// Penalty value of the rank when caught in a hand at round end.
    pub fn points(self) -> u32 {
        match self {
            Rank::Eight => 50,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 1,
            numeric => numeric as u32,
        }
    }

    /// Label used in short names: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    fn from_label(label: &str) -> Option<Rank> {
        let rank = match label.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return None,
        };
        Some(rank)
    }
}

/// A single playing card. Cards are plain values compared by (suit, rank).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    pub fn is_eight(&self) -> bool {
        self.rank == Rank::Eight
    }

    /// Compact identifier such as `8H` or `10D`; this is what players type.
    pub fn short_name(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.letter())
    }

    /// Human readable name such as `Eight of Hearts`.
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized card '{0}' (expected e.g. 8H, 10D, QS)")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_letter)
            .ok_or_else(|| ParseCardError(token.to_string()))?;
        let rank = Rank::from_label(chars.as_str()).ok_or_else(|| ParseCardError(token.to_string()))?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The 52-card set in generation order: suits in enumeration order, Ace..King.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_follow_rank() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Eight).points(), 50);
        assert_eq!(Card::new(Suit::Clubs, Rank::King).points(), 10);
        assert_eq!(Card::new(Suit::Clubs, Rank::Jack).points(), 10);
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).points(), 1);
        assert_eq!(Card::new(Suit::Diamonds, Rank::Seven).points(), 7);
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).points(), 10);
    }

    #[test]
    fn names() {
        let c = Card::new(Suit::Diamonds, Rank::Ten);
        assert_eq!(c.short_name(), "10D");
        assert_eq!(c.long_name(), "Ten of Diamonds");
        assert_eq!(c.to_string(), "10D");
        assert!(Card::new(Suit::Spades, Rank::Eight).is_eight());
    }

    #[test]
    fn parses_short_names() {
        assert_eq!("8H".parse(), Ok(Card::new(Suit::Hearts, Rank::Eight)));
        assert_eq!("10d".parse(), Ok(Card::new(Suit::Diamonds, Rank::Ten)));
        assert_eq!("td".parse(), Ok(Card::new(Suit::Diamonds, Rank::Ten)));
        assert_eq!(" qs ".parse(), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert!("11H".parse::<Card>().is_err());
        assert!("8X".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn every_card_round_trips_through_its_short_name() {
        for c in full_deck() {
            assert_eq!(c.short_name().parse::<Card>(), Ok(c));
        }
    }
}
