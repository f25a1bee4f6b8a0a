use super::strategy::GuessStrategy;
use crate::GameError;
use crate::cards::*;
use rand::Rng;

/// Uniformly random guesser with no memory.
/// Stands in for the human side in autoplay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fish;

impl GuessStrategy for Fish {
    fn guess<R: Rng + ?Sized>(&mut self, hand: &Hand, rng: &mut R) -> Result<Rank, GameError> {
        hand.random_rank(rng).ok_or(GameError::EmptyHandGuess)
    }
}
