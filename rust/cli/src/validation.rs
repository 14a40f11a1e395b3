//! Input parsing and validation for interactive commands.
//!
//! Handles the console's turn commands, suit names after an eight, and the
//! post-game gamble prompts. Parsers return structured results carrying a
//! user-facing message for anything they reject.

use eights_engine::cards::Suit;
use eights_engine::gamble::MULTIPLIERS;

/// Outcome of parsing one line typed on the player's turn.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A card short name to play; the round decides whether it is legal
    Play(String),
    /// Take a card from the deck
    Draw,
    /// Show the table again
    ShowHand,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a turn command (case-insensitive).
///
/// - "d" or "draw" → Draw
/// - "h" or "hand" → ShowHand
/// - "q" or "quit" → Quit
/// - anything else that looks like a card ("8H", "10d", "qs") → Play
///
/// ```rust
/// # use eights_cli::validation::{parse_command, ParseResult};
///
/// assert_eq!(parse_command("8h"), ParseResult::Play("8H".to_string()));
/// assert_eq!(parse_command("draw"), ParseResult::Draw);
/// assert_eq!(parse_command("q"), ParseResult::Quit);
/// match parse_command("") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Empty")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim().to_uppercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    if parts.len() > 1 {
        return ParseResult::Invalid(format!(
            "Enter one command at a time, got '{}'",
            input
        ));
    }

    match first {
        "Q" | "QUIT" => ParseResult::Quit,
        "D" | "DRAW" => ParseResult::Draw,
        "H" | "HAND" => ParseResult::ShowHand,
        token if (2..=3).contains(&token.len()) => ParseResult::Play(token.to_string()),
        token => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Type a card (e.g. 8H, 10D), d to draw, h for hand, q to quit",
            token
        )),
    }
}

/// Parses a suit named after an eight: a letter (d/h/s/c) or the full name.
///
/// ```rust
/// # use eights_cli::validation::parse_suit;
/// use eights_engine::cards::Suit;
///
/// assert_eq!(parse_suit("c"), Ok(Suit::Clubs));
/// assert_eq!(parse_suit("Hearts"), Ok(Suit::Hearts));
/// assert!(parse_suit("stars").is_err());
/// ```
pub fn parse_suit(input: &str) -> Result<Suit, String> {
    let s = input.trim().to_ascii_lowercase();
    match s.as_str() {
        "d" | "diamond" | "diamonds" => Ok(Suit::Diamonds),
        "h" | "heart" | "hearts" => Ok(Suit::Hearts),
        "s" | "spade" | "spades" => Ok(Suit::Spades),
        "c" | "club" | "clubs" => Ok(Suit::Clubs),
        "" => Err("Empty input".to_string()),
        other => Err(format!(
            "Unknown suit '{}'. Choose d, h, s or c",
            other
        )),
    }
}

/// Parses the gamble multiplier, accepting only 1, 2 or 3.
pub fn parse_multiplier(input: &str) -> Result<u32, String> {
    let n: u32 = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid multiplier '{}'", input.trim()))?;
    if !MULTIPLIERS.contains(&n) {
        return Err(format!(
            "Multiplier must be between {} and {}",
            MULTIPLIERS.start(),
            MULTIPLIERS.end()
        ));
    }
    Ok(n)
}

/// Parses yes/no answers used by confirmation prompts.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
