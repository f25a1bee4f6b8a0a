use thiserror::Error;

/// Contract violations of the card model.
///
/// None of these are user mistakes: an input in the wrong state is ignored,
/// never an error. Seeing one of these means a caller skipped its guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no more cards in the deck")]
    EmptyDeck,
    #[error("cannot guess from an empty hand")]
    EmptyHandGuess,
    #[error("hand size must be greater than 0")]
    InvalidHandSize,
}
