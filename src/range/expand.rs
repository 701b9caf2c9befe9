use super::builder::Builder;
use super::parser::Filter;
use super::parser::Term;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

impl Term {
    /// Pushes every concrete combination this term denotes.
    /// Emission order and duplicates are left for the builder to sort out.
    pub fn expand(&self, builder: &mut Builder) {
        match *self {
            Term::Exact(a, b) => builder.push(a, b),
            Term::Ranks {
                r1,
                r2,
                filter,
                plus: false,
            } => direct(builder, r1, r2, filter),
            Term::Ranks {
                r1,
                r2,
                filter,
                plus: true,
            } => above(builder, r1, r2, filter),
        }
    }
}

/// All combinations of two specific ranks admitted by the filter.
///
/// Suited: one per suit, never for a pocket pair.
/// Offsuit: every pair of distinct suits `s1 < s2`, assigned both ways
/// across the ranks unless the ranks are equal. That is 6 combinations for a
/// pocket pair and 12 otherwise.
fn direct(builder: &mut Builder, r1: Rank, r2: Rank, filter: Filter) {
    if filter.suited() && r1 != r2 {
        for suit in Suit::all() {
            builder.push(Card::from((r1, suit)), Card::from((r2, suit)));
        }
    }
    if filter.offsuited() {
        for s1 in Suit::all() {
            for s2 in Suit::all().into_iter().filter(|s2| *s2 > s1) {
                builder.push(Card::from((r1, s1)), Card::from((r2, s2)));
                if r1 != r2 {
                    builder.push(Card::from((r1, s2)), Card::from((r2, s1)));
                }
            }
        }
    }
}

/// The `+` suffix.
///
/// A pocket pair extends upward through aces: `44+` is `44` to `AA`.
/// Otherwise the higher rank stays put and the kicker climbs to just below
/// it: `K4+` is `K4` to `KQ`, and so is `4K+`.
fn above(builder: &mut Builder, r1: Rank, r2: Rank, filter: Filter) {
    if r1 == r2 {
        for r in r1.upto(Rank::MAX) {
            direct(builder, r, r, filter);
        }
    } else {
        let hi = std::cmp::max(r1, r2);
        let lo = std::cmp::min(r1, r2);
        for r in lo.upto(hi).filter(|r| *r < hi) {
            direct(builder, hi, r, filter);
        }
    }
}
