use crate::GameError;
use crate::cards::*;
use rand::Rng;

/// Anything that can pick a rank to ask the opponent for.
///
/// The computer's memory-augmented rule, a uniform random guesser, and a
/// human at a terminal are interchangeable here. The session drives the
/// computer side with a [`super::Robot`]; any strategy can drive the human
/// side through `GameSession::advance`.
pub trait GuessStrategy {
    /// Chooses a rank to ask for. Only ranks held in `hand` are sensible
    /// choices, so an empty hand is a contract violation.
    fn guess<R: Rng + ?Sized>(&mut self, hand: &Hand, rng: &mut R) -> Result<Rank, GameError>;
    /// Learns whether the opponent had any cards of the rank just asked for.
    fn notify(&mut self, _rank: Rank, _found: bool) {}
}
