use super::card::Card;
use super::rank::Rank;
use crate::GameError;
use crate::N_RANKS;
use crate::QUAD_SIZE;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Cards held by one side, bucketed by rank.
///
/// Each bucket holds 0..=4 cards since a rank has only four suits. `size` is
/// kept in step with every mutation rather than recounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    ranks: [Vec<Card>; N_RANKS],
    size: usize,
}

impl Hand {
    pub fn add(&mut self, card: Card) {
        self.ranks[card.rank().index()].push(card);
        self.size += 1;
    }
    /// Hands over every card of `rank`, or `None` if there are none to give.
    pub fn take_all(&mut self, rank: Rank) -> Option<Vec<Card>> {
        let bucket = &mut self.ranks[rank.index()];
        if bucket.is_empty() {
            return None;
        }
        let cards = std::mem::take(bucket);
        self.size -= cards.len();
        self.check();
        Some(cards)
    }
    /// Clears every rank held exactly four times and returns how many there were.
    pub fn remove_quads(&mut self) -> usize {
        let mut quads = 0;
        for bucket in self.ranks.iter_mut() {
            if bucket.len() == QUAD_SIZE {
                bucket.clear();
                quads += 1;
            }
        }
        self.size -= QUAD_SIZE * quads;
        self.check();
        quads
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn empty(&self) -> bool {
        self.size == 0
    }
    pub fn count(&self, rank: Rank) -> usize {
        self.ranks[rank.index()].len()
    }
    pub fn contains(&self, rank: Rank) -> bool {
        self.count(rank) > 0
    }
    /// Ranks with at least one card, in rank order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::all().iter().copied().filter(|r| self.contains(*r))
    }
    /// A held rank picked uniformly, or `None` for an empty hand.
    pub fn random_rank<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rank> {
        self.ranks().collect::<Vec<_>>().choose(rng).copied()
    }
    /// Flattened for display, grouped by rank.
    pub fn cards(&self) -> Vec<Card> {
        self.ranks.iter().flatten().copied().collect()
    }

    fn check(&self) {
        debug_assert_eq!(self.size, self.ranks.iter().map(Vec::len).sum::<usize>());
    }
}

/// A hand starts with at least one card.
impl TryFrom<Vec<Card>> for Hand {
    type Error = GameError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if cards.is_empty() {
            return Err(GameError::InvalidHandSize);
        }
        let mut hand = Self::default();
        cards.into_iter().for_each(|card| hand.add(card));
        Ok(hand)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards()
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
