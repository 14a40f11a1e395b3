//! Round controller.
//!
//! A [`Round`] owns every card of one deal (deck, both hands and the discard
//! pile) and moves them between locations one atomic step at a time. Turn
//! order is driven by [`Phase`] and the explicit transition table in
//! [`next_phase`]; anything the table does not allow is rejected.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{full_deck, Card, Suit};
use crate::deck::Deck;
use crate::errors::{GameError, MoveError};
use crate::hand::Hand;
use crate::logger::{MoveRecord, RoundRecord};
use crate::player::{Side, TurnAction, HAND_SIZE};
use crate::rules::{can_play, score_round, RoundEnd, RoundScore};

/// Consecutive blocked turns that end a round.
pub const BLOCKED_LIMIT: u8 = 2;

/// Where a round is in its life cycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Shuffling and dealing; only seen before the first turn
    Dealing,
    /// Waiting for the human to play or draw
    PlayerTurn,
    /// Waiting for the computer to play or draw
    ComputerTurn,
    /// The given side played an eight and must name the new suit
    ChooseSuit(Side),
    /// Terminal; the score has been computed
    RoundOver,
}

impl Phase {
    /// The side expected to act, if any.
    pub fn to_act(self) -> Option<Side> {
        match self {
            Phase::PlayerTurn => Some(Side::Human),
            Phase::ComputerTurn => Some(Side::Computer),
            Phase::ChooseSuit(side) => Some(side),
            Phase::Dealing | Phase::RoundOver => None,
        }
    }

    fn turn_of(side: Side) -> Phase {
        match side {
            Side::Human => Phase::PlayerTurn,
            Side::Computer => Phase::ComputerTurn,
        }
    }
}

/// Something that happened during a round and may move it to a new phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Trigger {
    Dealt,
    Played,
    PlayedEight,
    Drew,
    Blocked,
    SuitDeclared,
    Finished,
}

/// The round's transition table.
///
/// Returns `None` for every (phase, trigger) pair that is not a legal move.
pub fn next_phase(phase: Phase, trigger: Trigger) -> Option<Phase> {
    use Phase::*;
    use Trigger::*;
    match (phase, trigger) {
        (Dealing, Dealt) => Some(PlayerTurn),
        (PlayerTurn, Played | Drew | Blocked) => Some(ComputerTurn),
        (ComputerTurn, Played | Drew | Blocked) => Some(PlayerTurn),
        (PlayerTurn, PlayedEight) => Some(ChooseSuit(Side::Human)),
        (ComputerTurn, PlayedEight) => Some(ChooseSuit(Side::Computer)),
        (ChooseSuit(side), SuitDeclared) => Some(Phase::turn_of(side.other())),
        (PlayerTurn | ComputerTurn | ChooseSuit(_), Finished) => Some(RoundOver),
        _ => None,
    }
}

/// Notification for the presentation layer. The computer's drawn cards are
/// never revealed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Dealt { up_card: Card },
    Played { side: Side, card: Card },
    Drew { side: Side, card: Option<Card> },
    Blocked { side: Side, count: u8 },
    SuitChosen { side: Side, suit: Suit },
    RoundOver(RoundScore),
}

/// Snapshot of everything a player is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub round: u32,
    pub phase: Phase,
    pub up_card: Card,
    pub active_suit: Suit,
    pub human_hand: Vec<Card>,
    pub computer_cards: usize,
    pub blocked: u8,
    pub deck_remaining: usize,
}

/// Result of one accepted action.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Turn {
    pub side: Side,
    pub action: TurnAction,
    /// Card taken from the deck, for a successful draw
    pub drawn: Option<Card>,
    /// Phase after the action
    pub phase: Phase,
}

#[derive(Debug)]
pub struct Round {
    number: u32,
    seed: u64,
    deck: Deck,
    human: Hand,
    computer: Hand,
    /// Discard pile; the last card is the up-card
    pile: Vec<Card>,
    first_up_card: Card,
    active_suit: Suit,
    blocked: u8,
    phase: Phase,
    score: Option<RoundScore>,
    events: VecDeque<Event>,
    history: Vec<MoveRecord>,
}

impl Round {
    /// Shuffles a fresh deck, deals both hands and turns the first up-card.
    ///
    /// # Errors
    ///
    /// Only fails if the deck cannot cover the deal, which a full deck always
    /// can.
    pub fn deal(number: u32, seed: u64) -> Result<Self, GameError> {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let human = Hand::from_cards(deck.deal(HAND_SIZE)?);
        let computer = Hand::from_cards(deck.deal(HAND_SIZE)?);
        let up_card = deck.draw().ok_or(GameError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;

        let mut round = Self {
            number,
            seed,
            deck,
            human,
            computer,
            pile: vec![up_card],
            first_up_card: up_card,
            active_suit: up_card.suit,
            blocked: 0,
            phase: Phase::Dealing,
            score: None,
            events: VecDeque::new(),
            history: Vec::new(),
        };
        round.events.push_back(Event::Dealt { up_card });
        round.transition(Trigger::Dealt)?;
        debug!(round = number, seed, up_card = %up_card, "round dealt");
        Ok(round)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn to_act(&self) -> Option<Side> {
        self.phase.to_act()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }

    pub fn up_card(&self) -> Card {
        // The pile is seeded with the first up-card and only ever grows.
        self.pile.last().copied().unwrap_or(self.first_up_card)
    }

    pub fn active_suit(&self) -> Suit {
        self.active_suit
    }

    pub fn blocked_count(&self) -> u8 {
        self.blocked
    }

    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Cards across deck, both hands and the pile. Always 52.
    pub fn card_count(&self) -> usize {
        self.deck.remaining() + self.human.len() + self.computer.len() + self.pile.len()
    }

    /// Score of the finished round; computed once on entering `RoundOver`.
    pub fn score(&self) -> Option<RoundScore> {
        self.score
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn can_play(&self, card: Card) -> bool {
        can_play(card, self.up_card(), self.active_suit)
    }

    pub fn playable(&self, side: Side) -> Vec<Card> {
        self.hand(side)
            .playable_cards(self.up_card(), self.active_suit)
    }

    pub fn view(&self) -> TableView {
        TableView {
            round: self.number,
            phase: self.phase,
            up_card: self.up_card(),
            active_suit: self.active_suit,
            human_hand: self.human.cards().to_vec(),
            computer_cards: self.computer.len(),
            blocked: self.blocked,
            deck_remaining: self.deck.remaining(),
        }
    }

    /// Takes all notifications queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    pub fn play(&mut self, side: Side, card: Card) -> Result<Turn, MoveError> {
        self.apply(side, TurnAction::Play(card))
    }

    /// Plays the card named by a short name such as `8H`.
    pub fn play_named(&mut self, side: Side, name: &str) -> Result<Turn, MoveError> {
        let card: Card = name.parse()?;
        self.play(side, card)
    }

    pub fn draw(&mut self, side: Side) -> Result<Turn, MoveError> {
        self.apply(side, TurnAction::Draw)
    }

    pub fn declare_suit(&mut self, side: Side, suit: Suit) -> Result<Turn, MoveError> {
        self.apply(side, TurnAction::Declare(suit))
    }

    /// Validates and applies one action for `side`.
    ///
    /// # Errors
    ///
    /// Input problems come back as rejections and leave the round untouched.
    /// [`MoveError::Fatal`] means an engine invariant broke.
    pub fn apply(&mut self, side: Side, action: TurnAction) -> Result<Turn, MoveError> {
        let expected = match self.phase.to_act() {
            Some(expected) => expected,
            None => return Err(MoveError::RoundOver),
        };
        if side != expected {
            return Err(MoveError::NotYourTurn {
                expected,
                actual: side,
            });
        }

        let drawn = match (self.phase, action) {
            (Phase::ChooseSuit(_), TurnAction::Play(_) | TurnAction::Draw) => {
                return Err(MoveError::SuitChoicePending(side));
            }
            (Phase::PlayerTurn | Phase::ComputerTurn, TurnAction::Declare(_)) => {
                return Err(MoveError::NoSuitChoicePending);
            }
            (_, TurnAction::Play(card)) => {
                self.play_card(side, card)?;
                None
            }
            (_, TurnAction::Draw) => self.draw_card(side)?,
            (_, TurnAction::Declare(suit)) => {
                self.active_suit = suit;
                self.events.push_back(Event::SuitChosen { side, suit });
                self.transition(Trigger::SuitDeclared)?;
                debug!(round = self.number, %side, %suit, "suit declared");
                None
            }
        };

        self.history.push(MoveRecord {
            side,
            action,
            drawn,
        });
        Ok(Turn {
            side,
            action,
            drawn,
            phase: self.phase,
        })
    }

    fn play_card(&mut self, side: Side, card: Card) -> Result<(), MoveError> {
        if !self.hand(side).contains(card) {
            return Err(MoveError::NotHeld(card));
        }
        let up_card = self.up_card();
        if !can_play(card, up_card, self.active_suit) {
            return Err(MoveError::IllegalPlay {
                card,
                up_card,
                active_suit: self.active_suit,
            });
        }

        let hand = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        hand.remove_card(card)?;
        let emptied = hand.is_empty();
        self.pile.push(card);
        self.active_suit = card.suit;
        self.blocked = 0;
        self.events.push_back(Event::Played { side, card });
        debug!(round = self.number, %side, card = %card, "card played");

        if emptied {
            self.finish(RoundEnd::Out(side))
        } else if card.is_eight() {
            Ok(self.transition(Trigger::PlayedEight)?)
        } else {
            Ok(self.transition(Trigger::Played)?)
        }
    }

    fn draw_card(&mut self, side: Side) -> Result<Option<Card>, MoveError> {
        match self.deck.draw() {
            Some(card) => {
                match side {
                    Side::Human => self.human.add_card(card),
                    Side::Computer => self.computer.add_card(card),
                }
                let shown = (side == Side::Human).then_some(card);
                self.events.push_back(Event::Drew { side, card: shown });
                debug!(round = self.number, %side, "card drawn");
                self.transition(Trigger::Drew)?;
                Ok(Some(card))
            }
            None => {
                self.blocked += 1;
                self.events.push_back(Event::Blocked {
                    side,
                    count: self.blocked,
                });
                debug!(round = self.number, %side, blocked = self.blocked, "blocked on empty deck");
                self.transition(Trigger::Blocked)?;
                if self.blocked >= BLOCKED_LIMIT {
                    self.finish(RoundEnd::Blocked)?;
                }
                Ok(None)
            }
        }
    }

    fn finish(&mut self, end: RoundEnd) -> Result<(), MoveError> {
        self.transition(Trigger::Finished)?;
        if self.score.is_none() {
            let score = score_round(end, &self.human, &self.computer);
            self.score = Some(score);
            self.events.push_back(Event::RoundOver(score));
            info!(
                round = self.number,
                human = score.human,
                computer = score.computer,
                ?end,
                "round over"
            );
        }
        Ok(())
    }

    fn transition(&mut self, trigger: Trigger) -> Result<(), GameError> {
        let next = next_phase(self.phase, trigger).ok_or(GameError::InvalidTransition {
            from: self.phase,
            trigger,
        })?;
        self.phase = next;
        Ok(())
    }

    /// Move log of this round, ready for [`crate::logger::RoundLogger`].
    pub fn record(&self, round_id: String) -> RoundRecord {
        RoundRecord {
            round_id,
            seed: Some(self.seed),
            up_card: self.first_up_card,
            moves: self.history.clone(),
            result: self.score,
            ts: None,
            meta: None,
        }
    }

    /// Builds a round in an arbitrary position. Used by tests that need a
    /// specific table.
    ///
    /// # Errors
    ///
    /// [`GameError::DuplicateCard`] when a card is given twice across the
    /// hands and the up-card.
    #[doc(hidden)]
    pub fn from_parts(
        human: Vec<Card>,
        computer: Vec<Card>,
        up_card: Card,
        deck_cards: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut placed: Vec<Card> = Vec::with_capacity(human.len() + computer.len() + 1);
        for &card in human.iter().chain(computer.iter()).chain(std::iter::once(&up_card)) {
            if placed.contains(&card) {
                return Err(GameError::DuplicateCard(card));
            }
            placed.push(card);
        }
        let mut pile: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !placed.contains(c))
            .collect();
        // The top `deck_cards` of the remainder stay drawable, the rest sits
        // under the up-card.
        let stock = pile.split_off(pile.len().saturating_sub(deck_cards));
        pile.push(up_card);
        Ok(Self {
            number: 1,
            seed,
            deck: Deck::from_cards(stock, seed),
            human: Hand::from_cards(human),
            computer: Hand::from_cards(computer),
            pile,
            first_up_card: up_card,
            active_suit: up_card.suit,
            blocked: 0,
            phase: Phase::PlayerTurn,
            score: None,
            events: VecDeque::new(),
            history: Vec::new(),
        })
    }
}
