use crate::N_RANKS;

/// Card face value. Go Fish has no rank order beyond grouping, so the
/// discriminant is just the slot a rank occupies in per-rank tables.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Rank {
    #[default]
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub const fn all() -> &'static [Self; N_RANKS] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
        ]
    }
    /// Index into a `[T; N_RANKS]` table.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Label as printed on the card face.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism, case-insensitive so card ids like "j-hearts" parse
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        Rank::all()
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid rank str: {}", s))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert!(*rank == Rank::from(u8::from(*rank)));
        }
    }

    #[test]
    #[should_panic]
    fn past_king_is_not_a_rank() {
        Rank::from(13u8);
    }

    #[test]
    fn bijective_str() {
        for rank in Rank::all() {
            assert_eq!(Rank::try_from(rank.label()), Ok(*rank));
        }
    }

    #[test]
    fn parses_lowercase_faces() {
        assert_eq!(Rank::try_from("j"), Ok(Rank::Jack));
        assert_eq!(Rank::try_from(" a "), Ok(Rank::Ace));
        assert_eq!(Rank::try_from("10"), Ok(Rank::Ten));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!(Rank::try_from("T").is_err());
        assert!(Rank::try_from("1").is_err());
        assert!(Rank::try_from("").is_err());
    }

    #[test]
    fn index_matches_table_slot() {
        for (i, rank) in Rank::all().iter().enumerate() {
            assert_eq!(rank.index(), i);
        }
    }
}
