/// Whose move it is, or that the game has ended.
///
/// `ComputerTurn` only holds while the computer's turn runs inside a single
/// call, so callers never observe it between inputs.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Phase {
    #[default]
    HumanTurn,
    ComputerTurn,
    GoFish,
    GameOver,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HumanTurn => write!(f, "human turn"),
            Self::ComputerTurn => write!(f, "computer turn"),
            Self::GoFish => write!(f, "go fish"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}
