use super::phase::Phase;
use crate::cards::Card;

/// Read-only view of a session for display.
///
/// The computer's cards stay face down: only their count is exposed.
/// The human's cards serialize as their element ids ("10-hearts").
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    pub remaining: usize,
    pub empty: bool,
    #[serde(serialize_with = "ids")]
    pub human: Vec<Card>,
    pub human_score: usize,
    pub computer: usize,
    pub computer_score: usize,
    pub phase: Phase,
    pub status: String,
}

fn ids<S: serde::Serializer>(cards: &[Card], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(cards.iter().map(Card::id))
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .human
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "deck     {:>2}", self.remaining)?;
        writeln!(f, "computer {:>2} cards  score {}", self.computer, self.computer_score)?;
        writeln!(f, "you      {:>2} cards  score {}", self.human.len(), self.human_score)?;
        writeln!(f, "         {}", cards)?;
        write!(f, "{}", self.status)
    }
}
