use crate::N_RANKS;
use crate::cards::*;

/// Ranks the computer asked for and came away empty-handed.
///
/// The opponent may draw them later, so they are worth asking again. A flag
/// is raised when an ask fails and lowered when the rank is next chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Memory([bool; N_RANKS]);

impl Memory {
    pub fn flag(&mut self, rank: Rank) {
        self.0[rank.index()] = true;
    }
    pub fn clear(&mut self, rank: Rank) {
        self.0[rank.index()] = false;
    }
    pub fn flagged(&self, rank: Rank) -> bool {
        self.0[rank.index()]
    }
    /// Flagged ranks that `hand` can still legally ask for.
    pub fn candidates(&self, hand: &Hand) -> Vec<Rank> {
        hand.ranks().filter(|r| self.flagged(*r)).collect()
    }
}
