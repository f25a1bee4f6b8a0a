use super::card::Card;
use crate::GameError;
use rand::Rng;

/// The draw pile.
///
/// Shuffled exactly once, at construction, then consumed from the top (the
/// end of the vector) until empty. Cards only ever leave the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full 52-card deck in uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all().collect::<Vec<_>>();
        Self::shuffle(&mut cards, rng);
        Self(cards)
    }
    /// Durstenfeld's in-place Fisher-Yates: walk down from the top, swapping
    /// each slot with a uniform pick from the slots at or below it.
    fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.0.pop().ok_or(GameError::EmptyDeck)
    }
    /// Draws `n` cards, top first.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.draw()).collect()
    }
    pub fn empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

/// Stacked deck, top card last. Nothing is shuffled.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
