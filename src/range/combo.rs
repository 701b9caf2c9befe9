use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;
use std::cmp::Ordering;
use std::cmp::Reverse;

/// One concrete starting hand: two distinct cards in canonical order.
///
/// The higher-ranked card is always stored first; for a pocket pair the
/// higher suit goes first. So `Kd Ah` is stored as `Ah Kd` and `7c 7s` as
/// `7s 7c`. Two combinations are equal iff they hold the same two cards.
///
/// Ordering is range order: first rank descending, second rank descending,
/// then first suit and second suit ascending.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combo(Card, Card);

impl Combo {
    pub fn hi(&self) -> Card {
        self.0
    }
    pub fn lo(&self) -> Card {
        self.1
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    /// Canonical order of two cards. Rank first, suit breaks ties.
    fn canonical(a: Card, b: Card) -> (Card, Card) {
        match (a.rank(), a.suit()) >= (b.rank(), b.suit()) {
            true => (a, b),
            false => (b, a),
        }
    }
    fn key(&self) -> (Reverse<Rank>, Reverse<Rank>, Suit, Suit) {
        (
            Reverse(self.0.rank()),
            Reverse(self.1.rank()),
            self.0.suit(),
            self.1.suit(),
        )
    }
}

impl Ord for Combo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
impl PartialOrd for Combo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// (Card, Card) injection, in either order.
/// pairing a card with itself is a broken caller contract
impl From<(Card, Card)> for Combo {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "combination of {} with itself", a);
        let (hi, lo) = Self::canonical(a, b);
        Self(hi, lo)
    }
}

/// fallible version for untrusted input
impl TryFrom<[u8; 2]> for Combo {
    type Error = anyhow::Error;
    fn try_from([a, b]: [u8; 2]) -> Result<Self, Self::Error> {
        let deck = crate::N_CARDS as u8;
        match (a, b) {
            (a, _) if a >= deck => Err(anyhow::anyhow!("card out of deck: {}", a)),
            (_, b) if b >= deck => Err(anyhow::anyhow!("card out of deck: {}", b)),
            (a, b) if a == b => Err(anyhow::anyhow!("combination of card {} with itself", a)),
            (a, b) => Ok(Self::from((Card::from(a), Card::from(b)))),
        }
    }
}
impl From<Combo> for [u8; 2] {
    fn from(combo: Combo) -> Self {
        [u8::from(combo.0), u8::from(combo.1)]
    }
}

/// two-card card mask, for handing to an evaluator
impl From<Combo> for Hand {
    fn from(combo: Combo) -> Self {
        Hand::add(Hand::from(combo.0), Hand::from(combo.1))
    }
}

/// str isomorphism, e.g. "AhKd"
impl TryFrom<&str> for Combo {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s).map_err(|e| anyhow::anyhow!(e))?;
        match Vec::<Card>::from(hand).as_slice() {
            [a, b] => Ok(Self::from((*a, *b))),
            _ => Err(anyhow::anyhow!("combination needs exactly two cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn canonical_order() {
        let combo = Combo::from((card("Kd"), card("Ah")));
        assert_eq!(combo.hi(), card("Ah"));
        assert_eq!(combo.lo(), card("Kd"));
        let combo = Combo::from((card("7c"), card("7s")));
        assert_eq!(combo.to_string(), "7s7c");
    }

    #[test]
    fn unordered_equality() {
        let a = Combo::from((card("Qh"), card("3c")));
        let b = Combo::from((card("3c"), card("Qh")));
        assert_eq!(a, b);
    }

    #[test]
    fn range_ordering() {
        let aa = Combo::try_from("AsAc").unwrap();
        let ak = Combo::try_from("AcKd").unwrap();
        let akh = Combo::try_from("AhKc").unwrap();
        let kq = Combo::try_from("KsQs").unwrap();
        assert!(aa < ak);
        assert!(ak < akh);
        assert!(akh < kq);
        let aa_lo = Combo::try_from("AdAc").unwrap();
        assert!(aa_lo < aa);
    }

    #[test]
    fn suitedness() {
        assert!(Combo::try_from("AhKh").unwrap().is_suited());
        assert!(!Combo::try_from("AhKh").unwrap().is_pair());
        assert!(Combo::try_from("4c4d").unwrap().is_pair());
        assert!(!Combo::try_from("4c4d").unwrap().is_suited());
    }

    #[test]
    fn rejects_self_pair() {
        assert!(Combo::try_from([7u8, 7u8]).is_err());
        assert!(Combo::try_from([7u8, 52u8]).is_err());
        assert!(Combo::try_from("AhAh").is_err());
        assert!(Combo::try_from("AhKdQc").is_err());
        assert_eq!(<[u8; 2]>::from(Combo::try_from([0u8, 51u8]).unwrap()), [51, 0]);
    }

    #[test]
    #[should_panic]
    fn panics_on_self_pair() {
        Combo::from((card("Ah"), card("Ah")));
    }

    #[test]
    fn two_card_mask() {
        let combo = Combo::try_from("2cAs").unwrap();
        assert_eq!(u64::from(Hand::from(combo)), 1 | 1 << 51);
    }
}
