/// Card rank from Two through Ace.
///
/// Ranks are encoded `0..13` so that a card index is `rank * 4 + suit`.
/// The derived ordering is the poker ordering, which the range parser relies
/// on when scanning kickers upward in a plus-expression.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const MIN: Self = Rank::Two;
    pub const MAX: Self = Rank::Ace;

    /// All thirteen ranks in ascending order.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    /// Ranks from `self` up to and including `hi`.
    pub fn upto(self, hi: Rank) -> impl Iterator<Item = Rank> {
        (u8::from(self)..=u8::from(hi)).map(Rank::from)
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// char isomorphism
/// letters are accepted in either case, digits map directly
impl TryFrom<char> for Rank {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            't' | 'T' => Ok(Rank::Ten),
            'j' | 'J' => Ok(Rank::Jack),
            'q' | 'Q' => Ok(Rank::Queen),
            'k' | 'K' => Ok(Rank::King),
            'a' | 'A' => Ok(Rank::Ace),
            _ => Err(format!("invalid rank char: {}", c)),
        }
    }
}
impl From<Rank> for char {
    fn from(r: Rank) -> char {
        match r {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert!(rank == Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_char() {
        for rank in Rank::all() {
            assert_eq!(Rank::try_from(char::from(rank)), Ok(rank));
        }
    }

    #[test]
    fn case_insensitive_letters() {
        assert_eq!(Rank::try_from('a'), Ok(Rank::Ace));
        assert_eq!(Rank::try_from('A'), Ok(Rank::Ace));
        assert_eq!(Rank::try_from('t'), Ok(Rank::Ten));
        assert_eq!(Rank::try_from('T'), Ok(Rank::Ten));
    }

    #[test]
    fn rejects_non_ranks() {
        assert!(Rank::try_from('1').is_err());
        assert!(Rank::try_from('x').is_err());
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from("10").is_err());
    }

    #[test]
    fn upto_is_inclusive() {
        let ranks = Rank::Queen.upto(Rank::Ace).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Queen, Rank::King, Rank::Ace]);
        assert_eq!(Rank::Ace.upto(Rank::Ace).count(), 1);
        assert_eq!(Rank::King.upto(Rank::Queen).count(), 0);
    }
}
