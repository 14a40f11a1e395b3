use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GameError;
use crate::gamble::{self, GambleResult};
use crate::player::Side;
use crate::round::Round;
use crate::rules::RoundScore;

/// Rounds in a game unless configured otherwise.
pub const DEFAULT_ROUNDS: u32 = 5;
/// Bounds for a game whose length is drawn at random.
pub const RANDOM_ROUNDS: std::ops::RangeInclusive<u32> = 3..=5;

/// Running totals for both sides.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub human: u32,
    pub computer: u32,
}

impl Scores {
    pub fn add(&mut self, round: &RoundScore) {
        self.human += round.human;
        self.computer += round.computer;
    }

    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    pub(crate) fn for_side_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Side with the higher total, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(Side),
    Tie,
}

/// Game controller: a fixed number of rounds played one after another, with
/// scores accumulated across them.
///
/// # Examples
///
/// ```
/// use eights_engine::game::Game;
/// use eights_engine::player::Side;
///
/// let mut game = Game::new(7, 1);
/// let round = game.start_round().expect("first round");
/// assert_eq!(round.number(), 1);
/// assert_eq!(round.to_act(), Some(Side::Human));
/// assert!(!game.is_over());
/// ```
#[derive(Debug)]
pub struct Game {
    seed: u64,
    rng: ChaCha20Rng,
    total_rounds: u32,
    rounds_started: u32,
    rounds_recorded: u32,
    round_seeds: Vec<u64>,
    scores: Scores,
    round_scores: Vec<RoundScore>,
    gambled: bool,
}

impl Game {
    pub fn new(seed: u64, total_rounds: u32) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            total_rounds: total_rounds.max(1),
            rounds_started: 0,
            rounds_recorded: 0,
            round_seeds: Vec::new(),
            scores: Scores::default(),
            round_scores: Vec::new(),
            gambled: false,
        }
    }

    /// Game whose length is drawn from [`RANDOM_ROUNDS`] using the game seed.
    pub fn with_random_rounds(seed: u64) -> Self {
        let mut game = Self::new(seed, DEFAULT_ROUNDS);
        game.total_rounds = game.rng.random_range(RANDOM_ROUNDS);
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_recorded
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn round_scores(&self) -> &[RoundScore] {
        &self.round_scores
    }

    pub fn is_over(&self) -> bool {
        self.rounds_recorded >= self.total_rounds
    }

    /// Deals the next round with a deck seeded from the game RNG.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once every round has been started
    /// - [`GameError::RoundNotFinished`] while the previous round is unrecorded
    pub fn start_round(&mut self) -> Result<Round, GameError> {
        if self.rounds_started >= self.total_rounds {
            return Err(GameError::GameOver);
        }
        if self.rounds_started > self.rounds_recorded {
            return Err(GameError::RoundNotFinished(self.rounds_started));
        }
        let round_seed = self.rng.next_u64();
        self.round_seeds.push(round_seed);
        self.rounds_started += 1;
        Round::deal(self.rounds_started, round_seed)
    }

    /// Adds a finished round's score to the totals.
    ///
    /// Recording the same round again returns the stored score without
    /// touching the totals.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundNotFinished`] before the round is over
    /// - [`GameError::ForeignRound`] for a round this game did not deal
    /// - [`GameError::UnexpectedRound`] when a round is skipped
    pub fn record_round(&mut self, round: &Round) -> Result<RoundScore, GameError> {
        let number = round.number();
        let score = round
            .score()
            .ok_or(GameError::RoundNotFinished(number))?;
        let index = (number as usize).checked_sub(1);
        let dealt_seed = index.and_then(|i| self.round_seeds.get(i));
        if dealt_seed.is_some_and(|&seed| seed != round.seed()) {
            return Err(GameError::ForeignRound(number));
        }
        if let Some(stored) = index.and_then(|i| self.round_scores.get(i)) {
            return Ok(*stored);
        }
        let expected = self.rounds_recorded + 1;
        if number != expected || expected > self.rounds_started {
            return Err(GameError::UnexpectedRound {
                expected,
                actual: number,
            });
        }
        self.scores.add(&score);
        self.round_scores.push(score);
        self.rounds_recorded = expected;
        info!(
            round = expected,
            human = self.scores.human,
            computer = self.scores.computer,
            "round recorded"
        );
        Ok(score)
    }

    /// Winner by total points, once every round has been recorded.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_over() {
            return None;
        }
        Some(match self.scores.leader() {
            Some(side) => GameOutcome::Winner(side),
            None => GameOutcome::Tie,
        })
    }

    /// Side entitled to the optional post-game gamble: the trailing side of a
    /// finished game that has not gambled yet.
    pub fn gamble_side(&self) -> Option<Side> {
        if !self.is_over() || self.gambled {
            return None;
        }
        self.scores.leader().map(Side::other)
    }

    /// Applies the opt-in multiplier house rule.
    ///
    /// The human supplies `human_multiplier` when trailing; the computer's
    /// multiplier is drawn from the game RNG. Returns `None` when nobody may
    /// gamble (tie, game unfinished, or already gambled).
    pub fn gamble(&mut self, human_multiplier: u32) -> Result<Option<GambleResult>, GameError> {
        let Some(side) = self.gamble_side() else {
            return Ok(None);
        };
        let multiplier = match side {
            Side::Human => human_multiplier,
            Side::Computer => gamble::computer_multiplier(&mut self.rng),
        };
        let result = gamble::apply(&mut self.scores, side, multiplier)?;
        self.gambled = true;
        info!(%side, multiplier, after = result.after, "gamble applied");
        Ok(Some(result))
    }
}
