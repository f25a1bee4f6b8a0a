use crate::cards::Rank;

/// Everything the UI can ask of a session.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Input {
    /// Ask the computer for every card of a rank.
    Ask(Rank),
    /// Draw from the deck after a miss.
    Draw,
    /// Start over once the game has ended.
    NewGame,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ask(rank) => write!(f, "ask {}", rank),
            Self::Draw => write!(f, "draw"),
            Self::NewGame => write!(f, "new game"),
        }
    }
}
