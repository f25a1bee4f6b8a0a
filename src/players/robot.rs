use super::memory::Memory;
use super::strategy::GuessStrategy;
use crate::GameError;
use crate::cards::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// The computer opponent.
///
/// Prefers ranks it asked for before without luck, as long as it still holds
/// one; otherwise picks uniformly among the ranks it holds.
#[derive(Debug, Clone, Default)]
pub struct Robot {
    memory: Memory,
}

impl Robot {
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl GuessStrategy for Robot {
    fn guess<R: Rng + ?Sized>(&mut self, hand: &Hand, rng: &mut R) -> Result<Rank, GameError> {
        if hand.empty() {
            return Err(GameError::EmptyHandGuess);
        }
        let remembered = self.memory.candidates(hand);
        if let Some(rank) = remembered.choose(rng).copied() {
            self.memory.clear(rank);
            log::debug!("computer recalls {}", rank);
            return Ok(rank);
        }
        hand.random_rank(rng).ok_or(GameError::EmptyHandGuess)
    }
    fn notify(&mut self, rank: Rank, found: bool) {
        if !found {
            self.memory.flag(rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        Hand::try_from(cards.iter().copied().map(Card::from).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn empty_hand_cannot_guess() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref empty = Hand::default();
        assert_eq!(Robot::default().guess(empty, rng), Err(GameError::EmptyHandGuess));
    }

    #[test]
    fn guesses_a_held_rank() {
        let ref hand = hand(&[(Rank::Four, Suit::Club), (Rank::Nine, Suit::Heart)]);
        let mut robot = Robot::default();
        for seed in 0..64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let rank = robot.guess(hand, rng).unwrap();
            assert!(hand.contains(rank));
        }
    }

    #[test]
    fn remembered_rank_is_chosen_and_forgotten() {
        let ref hand = hand(&[
            (Rank::Seven, Suit::Club),
            (Rank::Two, Suit::Heart),
            (Rank::King, Suit::Spade),
        ]);
        for seed in 0..64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut robot = Robot::default();
            robot.notify(Rank::Seven, false);
            assert!(robot.memory().flagged(Rank::Seven));
            assert_eq!(robot.guess(hand, rng), Ok(Rank::Seven));
            assert!(!robot.memory().flagged(Rank::Seven));
        }
    }

    #[test]
    fn remembered_rank_not_in_hand_is_ignored() {
        let ref hand = hand(&[(Rank::Two, Suit::Heart)]);
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut robot = Robot::default();
        robot.notify(Rank::Seven, false);
        assert_eq!(robot.guess(hand, rng), Ok(Rank::Two));
        assert!(robot.memory().flagged(Rank::Seven));
    }

    #[test]
    fn successful_ask_leaves_memory_alone() {
        let mut robot = Robot::default();
        robot.notify(Rank::Queen, true);
        assert!(!robot.memory().flagged(Rank::Queen));
    }
}
