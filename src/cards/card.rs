use super::rank::Rank;
use super::suit::Suit;
use crate::DECK_SIZE;
use crate::N_SUITS;

/// A playing card encoded as a single byte.
///
/// The 52 cards map bijectively onto `0..52` as `rank * 4 + suit`, so a
/// sorted run of bytes is a sorted run of cards, grouped by rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / N_SUITS as u8)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % N_SUITS as u8)
    }
    /// Every card once, in byte order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DECK_SIZE as u8).map(Self)
    }
    /// Element id the browser uses for this card, e.g. "10-hearts".
    pub fn id(&self) -> String {
        format!("{}-{}", self.rank().label().to_lowercase(), self.suit().slug())
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * N_SUITS as u8 + u8::from(s))
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < DECK_SIZE, "invalid card u8: {}", n);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
