use super::card::Card;

/// Hand represents an unordered set of Cards as a 64-bit card mask.
///
/// Bit `rank * 4 + suit` is set iff that card is present, so only the 52
/// least significant bits are meaningful. Iteration and display both follow
/// index order (2c, 2d, 2h, 2s, 3c, ...), which is not the canonical order of
/// a combination.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// Disjoint union. Overlapping hands are a logic error.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// Lenient scan of concatenated two-character cards, e.g. `"2c8hAh"`.
    ///
    /// The text is normalized first. Scanning stops silently at the first
    /// pair that does not decode, keeping every card read before it. A
    /// dangling odd character is never looked at.
    pub fn scan(text: &str) -> Self {
        let chars = crate::normalize(text).chars().collect::<Vec<char>>();
        let mut hand = Self::empty();
        for pair in chars.chunks_exact(2) {
            match Card::try_from((pair[0], pair[1])) {
                Ok(card) => hand.insert(card),
                Err(e) => {
                    log::trace!("card scan stopped: {}", e);
                    break;
                }
            }
        }
        hand
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// bits above the deck are discarded
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// strict str parsing. every two-character chunk must be a card
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = crate::normalize(s).chars().collect::<Vec<char>>();
        if chars.len() % 2 != 0 {
            return Err(format!("odd number of characters: {}", s));
        }
        chars
            .chunks_exact(2)
            .map(|pair| Card::try_from((pair[0], pair[1])))
            .collect::<Result<Vec<Card>, _>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::seq::IteratorRandom;

    #[test]
    fn index_order_display() {
        let hand = Hand::from(0b1_0001u64);
        assert_eq!(hand.to_string(), "2c3c");
        let hand = Hand::scan("AhKd2c");
        assert_eq!(hand.to_string(), "2cKdAh");
    }

    #[test]
    fn scan_normalizes() {
        assert_eq!(Hand::scan("Ah Kd"), Hand::scan("AHKD"));
        assert_eq!(Hand::scan("ah\tkd").size(), 2);
    }

    #[test]
    fn scan_stops_at_garbage() {
        let hand = Hand::scan("2c8hxxAh");
        assert_eq!(hand.size(), 2);
        assert!(hand.contains(&Card::try_from("2c").unwrap()));
        assert!(hand.contains(&Card::try_from("8h").unwrap()));
        assert!(!hand.contains(&Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn scan_ignores_dangling_char() {
        assert_eq!(u64::from(Hand::scan("2cA")), 1);
        assert_eq!(u64::from(Hand::scan("")), 0);
        assert_eq!(u64::from(Hand::scan("2")), 0);
    }

    #[test]
    fn strict_parse() {
        assert!(Hand::try_from("2cA").is_err());
        assert!(Hand::try_from("2cxx").is_err());
        assert_eq!(Hand::try_from("2c 8h"), Ok(Hand::scan("2c8h")));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::scan("Jc Ts 2c Js").into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn mask_round_trip() {
        let ref mut rng = rand::rng();
        for _ in 0..256 {
            let n = rng.random_range(0..=26);
            let hand = Card::all()
                .choose_multiple(rng, n)
                .into_iter()
                .map(Hand::from)
                .fold(Hand::empty(), Hand::add);
            assert_eq!(Hand::scan(&hand.to_string()), hand);
        }
    }
}
