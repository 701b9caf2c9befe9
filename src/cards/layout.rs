use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;

/// A set of cards in the external hand evaluator's bit layout.
///
/// The evaluator packs each suit into its own 16-bit lane, spades in the
/// lowest lane and clubs in the highest, with rank as the bit offset inside
/// the lane:
///
/// ```text
/// bit = (3 - suit) * 16 + rank
///
/// 2s -> 0*16 + 0  == 0
/// 3h -> 1*16 + 1  == 17
/// 2c -> 3*16 + 0  == 48
/// ```
///
/// This layout is owned by the evaluator. Nothing else in this crate reads
/// it; convert to a [`Hand`] card mask at the boundary.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct EvalMask(u64);

impl EvalMask {
    const LANE: u32 = 16;
    /// 13 rank bits in each of the 4 suit lanes
    const fn mask() -> u64 {
        0x1FFF_1FFF_1FFF_1FFF
    }
    /// Bit position of a card.
    fn bit(card: Card) -> u32 {
        (3 - u8::from(card.suit()) as u32) * Self::LANE + u8::from(card.rank()) as u32
    }
    /// Card at a bit position. Suit is the complement of the lane index,
    /// `!(i / 16) & 3`, which equals `3 - i / 16` for the four lanes.
    fn card(i: u32) -> Card {
        let rank = Rank::from((i % Self::LANE) as u8);
        let suit = Suit::from((!(i / Self::LANE) & 3) as u8);
        Card::from((rank, suit))
    }
}

/// u64 isomorphism
/// padding bits between lanes are discarded
impl From<u64> for EvalMask {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<EvalMask> for u64 {
    fn from(m: EvalMask) -> Self {
        m.0
    }
}

/// Hand isomorphism
impl From<EvalMask> for Hand {
    fn from(m: EvalMask) -> Self {
        let mut bits = m.0;
        let mut hand = Hand::empty();
        while bits > 0 {
            hand.insert(EvalMask::card(bits.trailing_zeros()));
            bits &= bits - 1;
        }
        hand
    }
}
impl From<Hand> for EvalMask {
    fn from(hand: Hand) -> Self {
        Self(hand.map(|c| 1u64 << EvalMask::bit(c)).fold(0, |a, b| a | b))
    }
}

impl std::fmt::Display for EvalMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Hand::from(*self))
    }
}
