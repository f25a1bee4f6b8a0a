use std::cmp::Ordering;

/// Who won, decided by score alone.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Human,
    Computer,
    Tie,
}

/// (human score, computer score)
impl From<(usize, usize)> for Outcome {
    fn from((human, computer): (usize, usize)) -> Self {
        match human.cmp(&computer) {
            Ordering::Greater => Self::Human,
            Ordering::Less => Self::Computer,
            Ordering::Equal => Self::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_wins() {
        assert_eq!(Outcome::from((3, 2)), Outcome::Human);
        assert_eq!(Outcome::from((0, 1)), Outcome::Computer);
    }

    #[test]
    fn equal_scores_tie() {
        assert_eq!(Outcome::from((0, 0)), Outcome::Tie);
        assert_eq!(Outcome::from((6, 6)), Outcome::Tie);
    }
}
