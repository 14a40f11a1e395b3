//! Random legal play, mainly a sparring partner for `sim`.

use std::sync::Mutex;

use crate::Opponent;
use eights_engine::cards::{all_suits, Card, Suit};
use eights_engine::hand::Hand;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Picks uniformly among legal cards and suits. Seeded, so a simulation
/// replays identically.
#[derive(Debug)]
pub struct RandomAI {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    fn pick<T: Copy>(&self, items: &[T]) -> Option<T> {
        // a poisoned lock still holds a usable rng
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        items.choose(&mut *rng).copied()
    }
}

impl Opponent for RandomAI {
    fn choose_card(&self, hand: &Hand, up_card: Card, active_suit: Suit) -> Option<Card> {
        self.pick(&hand.playable_cards(up_card, active_suit))
    }

    fn choose_suit(&self, _hand: &Hand) -> Suit {
        self.pick(&all_suits()).unwrap_or(Suit::Diamonds)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_random_ai_only_plays_legal_cards() {
        let ai = RandomAI::new(9);
        let hand = Hand::from_cards(vec![c("2S"), c("9D"), c("8C"), c("KS")]);
        for _ in 0..50 {
            let card = ai.choose_card(&hand, c("5S"), Suit::Spades).unwrap();
            assert!([c("2S"), c("8C"), c("KS")].contains(&card));
        }
        let stuck = Hand::from_cards(vec![c("9D")]);
        assert_eq!(ai.choose_card(&stuck, c("5S"), Suit::Spades), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let a = RandomAI::new(77);
        let b = RandomAI::new(77);
        let hand = Hand::from_cards(vec![c("2S"), c("3S"), c("4S"), c("KS")]);
        for _ in 0..20 {
            assert_eq!(
                a.choose_card(&hand, c("5S"), Suit::Spades),
                b.choose_card(&hand, c("5S"), Suit::Spades)
            );
            assert_eq!(a.choose_suit(&hand), b.choose_suit(&hand));
        }
    }
}
