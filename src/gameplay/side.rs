use crate::GameError;
use crate::cards::*;

/// One player's hand and the quads they have laid down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Side {
    hand: Hand,
    score: usize,
}

impl Side {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn score(&self) -> usize {
        self.score
    }
    pub fn empty(&self) -> bool {
        self.hand.empty()
    }
    pub fn add(&mut self, card: Card) {
        self.hand.add(card);
    }
    pub fn extend(&mut self, cards: Vec<Card>) {
        cards.into_iter().for_each(|card| self.hand.add(card));
    }
    pub fn take_all(&mut self, rank: Rank) -> Option<Vec<Card>> {
        self.hand.take_all(rank)
    }
    /// Lays down every quad in hand, one point each. Returns the points won.
    pub fn score_quads(&mut self) -> usize {
        let quads = self.hand.remove_quads();
        self.score += quads;
        quads
    }
}

impl From<Hand> for Side {
    fn from(hand: Hand) -> Self {
        Self { hand, score: 0 }
    }
}
impl TryFrom<Vec<Card>> for Side {
    type Error = GameError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_from(cards).map(Self::from)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.score, self.hand)
    }
}
