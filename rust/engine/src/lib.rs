//! # eights-engine: Crazy Eights Rules Engine
//!
//! Rules, turn sequencing and scoring for Crazy Eights between one human and
//! one computer opponent. Every shuffle is driven by a seeded ChaCha20 RNG, so
//! a game seed reproduces the whole game.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), names and points
//! - [`deck`] - Seeded draw pile with shuffle, deal and draw
//! - [`hand`] - Cards held by one side, playability and hand value
//! - [`rules`] - Play legality and round scoring
//! - [`round`] - Round controller: phases, turns, events, termination
//! - [`game`] - Game controller: rounds, running totals, winner
//! - [`gamble`] - Optional post-game multiplier house rule
//! - [`player`] - Sides and turn actions
//! - [`logger`] - RoundRecord JSONL move log
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use eights_engine::cards::{Card, Rank, Suit};
//! use eights_engine::rules::can_play;
//!
//! let up = Card::new(Suit::Spades, Rank::Five);
//! let eight = Card::new(Suit::Hearts, Rank::Eight);
//! assert!(can_play(eight, up, Suit::Spades));
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use eights_engine::game::Game;
//! use eights_engine::player::Side;
//!
//! let mut game = Game::new(42, 1);
//! let mut round = game.start_round().unwrap();
//!
//! // The human always opens; drawing passes the turn.
//! round.draw(Side::Human).unwrap();
//! assert_eq!(round.to_act(), Some(Side::Computer));
//! assert_eq!(round.card_count(), 52);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod gamble;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
