use super::outcome::Outcome;
use crate::cards::Rank;

/// Outcome of the last action, as shown to the human.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Status {
    #[default]
    Start,
    GoFish,
    GoAgain,
    ComputerAsked(Vec<Rank>),
    ComputerEmpty,
    /// Human left without cards, with whatever the computer asked for to get there.
    HumanEmpty(Vec<Rank>),
    GameOver(Outcome),
}

impl Status {
    fn join(ranks: &[Rank]) -> String {
        ranks
            .iter()
            .map(Rank::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Select a card to start the game."),
            Self::GoFish => write!(f, "No luck, you will need to go fish."),
            Self::GoAgain => write!(f, "You guessed correctly! Go again."),
            Self::ComputerAsked(ranks) => {
                write!(f, "Computer asked for {}, your turn.", Self::join(ranks))
            }
            Self::ComputerEmpty => write!(f, "Computer hand is empty, it must go fish. Your turn."),
            Self::HumanEmpty(ranks) if ranks.is_empty() => write!(f, "You have no cards, go fish."),
            Self::HumanEmpty(ranks) => write!(
                f,
                "Computer asked for {}. You have no cards, go fish.",
                Self::join(ranks)
            ),
            Self::GameOver(Outcome::Computer) => {
                write!(f, "Game over, computer won :-( Start a new game to play again.")
            }
            Self::GameOver(Outcome::Human) => {
                write!(f, "Game over, you won :-) Start a new game to play again.")
            }
            Self::GameOver(Outcome::Tie) => {
                write!(f, "Game over, it's a tie. Start a new game to play again.")
            }
        }
    }
}
