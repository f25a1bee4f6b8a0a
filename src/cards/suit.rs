use crate::N_SUITS;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self; N_SUITS] {
        &[Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// Suit part of the browser's card ids, e.g. the "diams" in "q-diams".
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Club => "clubs",
            Self::Diamond => "diams",
            Self::Heart => "hearts",
            Self::Spade => "spades",
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "♣",
                Suit::Diamond => "♦",
                Suit::Heart => "♥",
                Suit::Spade => "♠",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert!(*suit == Suit::from(u8::from(*suit)));
        }
    }

    #[test]
    #[should_panic(expected = "invalid suit u8: 4")]
    fn past_spades_is_not_a_suit() {
        Suit::from(4u8);
    }
}
