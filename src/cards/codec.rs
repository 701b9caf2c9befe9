//! Free-function card codec over raw integers and strings.
//!
//! These are the untyped edges of the crate, for callers that hold plain
//! `u8`/`u64` values. Each one delegates to the typed conversions on
//! [`Rank`], [`Suit`], [`Card`], [`Hand`] and [`EvalMask`]. Decoding failures
//! come back as `None` rather than a sentinel value.
use super::card::Card;
use super::hand::Hand;
use super::layout::EvalMask;
use super::rank::Rank;
use super::suit::Suit;

/// Rank index to character. Out-of-range indices render as `'?'`.
pub fn rank_to_char(rank: u8) -> char {
    match rank {
        r if (r as usize) < crate::N_RANKS => char::from(Rank::from(r)),
        _ => '?',
    }
}
/// Character to rank index. Letters are case-insensitive.
pub fn char_to_rank(c: char) -> Option<u8> {
    Rank::try_from(c).ok().map(u8::from)
}

/// Suit index to character. Out-of-range indices render as `'?'`.
pub fn suit_to_char(suit: u8) -> char {
    match suit {
        s if (s as usize) < crate::N_SUITS => char::from(Suit::from(s)),
        _ => '?',
    }
}
/// Character to suit index. Only lowercase is accepted.
pub fn char_to_suit(c: char) -> Option<u8> {
    Suit::try_from(c).ok().map(u8::from)
}

/// Card index to its two-character string, e.g. `51 -> "As"`.
pub fn card_index_to_str(card: u8) -> String {
    format!("{}{}", rank_to_char(card / 4), suit_to_char(card % 4))
}
/// Two-character string to card index, e.g. `"As" -> 51`.
pub fn str_to_card_index(card: &str) -> Option<u8> {
    Card::try_from(card).ok().map(u8::from)
}

/// Renders every set bit of a card mask in index order, no separator.
pub fn card_mask_to_str(mask: u64) -> String {
    Hand::from(mask).to_string()
}
/// Card mask of a string like `"2c8hAh"`. Stops at the first undecodable pair.
pub fn get_card_mask(text: &str) -> u64 {
    u64::from(Hand::scan(text))
}

/// Re-packs an evaluator hand mask as a card mask.
pub fn hand_mask_to_card_mask(mask: u64) -> u64 {
    u64::from(Hand::from(EvalMask::from(mask)))
}
/// Renders an evaluator hand mask in card index order.
pub fn hand_mask_to_str(mask: u64) -> String {
    EvalMask::from(mask).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_chars() {
        assert_eq!(rank_to_char(0), '2');
        assert_eq!(rank_to_char(7), '9');
        assert_eq!(rank_to_char(8), 'T');
        assert_eq!(rank_to_char(12), 'A');
        assert_eq!(rank_to_char(13), '?');
        assert_eq!(char_to_rank('k'), Some(11));
        assert_eq!(char_to_rank('K'), Some(11));
        assert_eq!(char_to_rank('x'), None);
    }

    #[test]
    fn suit_chars() {
        assert_eq!(suit_to_char(0), 'c');
        assert_eq!(suit_to_char(3), 's');
        assert_eq!(suit_to_char(4), '?');
        assert_eq!(char_to_suit('h'), Some(2));
        assert_eq!(char_to_suit('H'), None);
    }

    #[test]
    fn card_index_round_trip() {
        for c in 0..crate::N_CARDS as u8 {
            assert_eq!(str_to_card_index(&card_index_to_str(c)), Some(c));
        }
        assert_eq!(card_index_to_str(51), "As");
        assert_eq!(str_to_card_index("Tc"), Some(32));
        assert_eq!(str_to_card_index("T"), None);
    }

    #[test]
    fn card_masks() {
        assert_eq!(get_card_mask("2c"), 0x1);
        assert_eq!(get_card_mask("2c8hAh"), 1 | 1 << 26 | 1 << 50);
        assert_eq!(card_mask_to_str(1 | 1 << 26 | 1 << 50), "2c8hAh");
        assert_eq!(card_mask_to_str(0), "");
        assert_eq!(get_card_mask("Ah2c??Kd"), 1 | 1 << 50);
    }

    #[test]
    fn hand_masks() {
        assert_eq!(hand_mask_to_card_mask(1 << 0), 1 << 3);
        assert_eq!(hand_mask_to_card_mask(1 << 48), 1 << 0);
        assert_eq!(hand_mask_to_card_mask(1 << 28 | 1 << 12), 1 << 50 | 1 << 51);
        assert_eq!(hand_mask_to_str(1 << 28 | 1 << 12), "AhAs");
    }
}
