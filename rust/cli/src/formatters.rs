//! Card, table, and event formatters for terminal display.
//!
//! Pure functions turning engine values into text. Suits render as Unicode
//! symbols where the terminal supports them, with an ASCII fallback.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use eights_engine::cards::{Card, Rank, Suit};
//! use eights_cli::formatters::{format_card, format_hand};
//!
//! let eight = Card::new(Suit::Hearts, Rank::Eight);
//! assert!(format_card(&eight) == "8♥" || format_card(&eight) == "8h");
//! assert!(format_hand(&[eight]).starts_with("[8"));
//! ```

use eights_engine::cards::{Card, Suit};
use eights_engine::game::{GameOutcome, Scores};
use eights_engine::player::Side;
use eights_engine::round::{Event, TableView};
use eights_engine::rules::{RoundEnd, RoundScore};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). Elsewhere assumes Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Rank label followed by the suit symbol: "8♥", "10♦", "Q♠".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in bracket notation, "[]" when empty.
///
/// ```rust
/// use eights_engine::cards::{Card, Rank, Suit};
/// # use eights_cli::formatters::format_hand;
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
/// ];
/// let formatted = format_hand(&cards);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// assert_eq!(format_hand(&[]), "[]");
/// ```
pub fn format_hand(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Hand listing with the short names to type next to each card.
pub fn format_hand_with_names(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{} ({})", format_card(c), c.short_name()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Human => "You",
        Side::Computer => "Computer",
    }
}

/// Multi-line table display. The computer's hand is shown as a count only.
pub fn format_table(view: &TableView) -> String {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!(
        "Up-card: {}   Active suit: {} ({})",
        format_card(&view.up_card),
        format_suit(&view.active_suit),
        view.active_suit.name()
    ));
    lines.push(format!(
        "Computer holds {} card(s)   Deck: {}",
        view.computer_cards, view.deck_remaining
    ));
    if view.blocked > 0 {
        lines.push(format!("Blocked turns: {}", view.blocked));
    }
    lines.push(format!("Your hand: {}", format_hand_with_names(&view.human_hand)));
    lines.join("\n")
}

/// One line per event, `None` for events the console does not announce.
pub fn format_event(event: &Event) -> Option<String> {
    match event {
        Event::Dealt { up_card } => Some(format!("Up-card is {}", format_card(up_card))),
        Event::Played { side, card } => Some(format!(
            "{} played {}",
            side_label(*side),
            format_card(card)
        )),
        Event::Drew {
            side: Side::Human,
            card: Some(card),
        } => Some(format!("You drew {}", format_card(card))),
        Event::Drew { side, .. } => Some(format!("{} drew a card", side_label(*side))),
        Event::Blocked { side, count } => Some(format!(
            "{} could not draw: the deck is empty (blocked {})",
            side_label(*side),
            count
        )),
        Event::SuitChosen { side, suit } => Some(format!(
            "{} named {} {}",
            side_label(*side),
            suit.name(),
            format_suit(suit)
        )),
        Event::RoundOver(_) => None,
    }
}

pub fn format_round_score(number: u32, score: &RoundScore) -> String {
    let how = match score.end {
        RoundEnd::Out(Side::Human) => "you went out".to_string(),
        RoundEnd::Out(Side::Computer) => "the computer went out".to_string(),
        RoundEnd::Blocked => "blocked".to_string(),
    };
    format!(
        "Round {} over ({}): you +{}, computer +{}",
        number, how, score.human, score.computer
    )
}

pub fn format_scores(scores: &Scores) -> String {
    format!("Score: you {} - computer {}", scores.human, scores.computer)
}

pub fn format_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(Side::Human) => "You win the game!".to_string(),
        GameOutcome::Winner(Side::Computer) => "The computer wins the game.".to_string(),
        GameOutcome::Tie => "The game is a tie.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eights_engine::cards::Rank;
    use eights_engine::round::Phase;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let diamonds = format_suit(&Suit::Diamonds);
        assert!(diamonds == "♦" || diamonds == "d");
        let clubs = format_suit(&Suit::Clubs);
        assert!(clubs == "♣" || clubs == "c");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_card_uses_ten_label() {
        let ten = Card::new(Suit::Diamonds, Rank::Ten);
        let formatted = format_card(&ten);
        assert!(formatted == "10♦" || formatted == "10d");
    }

    #[test]
    fn test_hand_with_names_lists_short_names() {
        let s = format_hand_with_names(&[c("8H"), c("QS")]);
        assert!(s.contains("(8H)"));
        assert!(s.contains("(QS)"));
    }

    #[test]
    fn test_table_hides_computer_cards() {
        let view = TableView {
            round: 1,
            phase: Phase::PlayerTurn,
            up_card: c("5S"),
            active_suit: Suit::Spades,
            human_hand: vec![c("8H"), c("3D")],
            computer_cards: 5,
            blocked: 0,
            deck_remaining: 41,
        };
        let text = format_table(&view);
        assert!(text.contains("Computer holds 5 card(s)"));
        assert!(text.contains("Deck: 41"));
        assert!(text.contains("Spades"));
        assert!(!text.contains("Blocked"));
    }

    #[test]
    fn test_computer_draw_is_not_revealed() {
        let hidden = format_event(&Event::Drew {
            side: Side::Computer,
            card: None,
        })
        .unwrap();
        assert_eq!(hidden, "Computer drew a card");
        let shown = format_event(&Event::Drew {
            side: Side::Human,
            card: Some(c("KC")),
        })
        .unwrap();
        assert!(shown.starts_with("You drew K"));
    }

    #[test]
    fn test_round_and_game_summaries() {
        let score = RoundScore {
            end: RoundEnd::Blocked,
            human: 10,
            computer: 3,
        };
        assert_eq!(
            format_round_score(2, &score),
            "Round 2 over (blocked): you +10, computer +3"
        );
        assert_eq!(
            format_scores(&Scores {
                human: 10,
                computer: 3
            }),
            "Score: you 10 - computer 3"
        );
        assert_eq!(format_outcome(GameOutcome::Tie), "The game is a tie.");
    }
}
