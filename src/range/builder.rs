use super::combo::Combo;
use super::parser::Cursor;
use super::range::Range;
use crate::cards::Card;

/// Working buffer for a [`Range`] under construction.
///
/// Terms push raw, unordered card pairs in whatever order they expand.
/// Nothing is canonical until [`Builder::finish`], which is the only way to
/// get a `Range` out.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    raw: Vec<(Card, Card)>,
}

impl Builder {
    /// Appends one raw pair.
    pub fn push(&mut self, a: Card, b: Card) {
        self.raw.push((a, b));
    }
    pub fn raw(&self) -> &[(Card, Card)] {
        &self.raw
    }

    /// Every two-card combination of the deck.
    pub fn deck(&mut self) {
        for a in Card::all() {
            for b in Card::all().take_while(|b| *b < a) {
                self.push(a, b);
            }
        }
    }

    /// Parses a range expression into the buffer.
    ///
    /// Returns `true` iff the whole normalized expression was consumed.
    /// Whatever parsed before a malformed term is kept either way.
    pub fn parse(&mut self, text: &str) -> bool {
        let text = crate::normalize(text);
        if text == crate::RANDOM {
            self.deck();
            return true;
        }
        let mut cursor = Cursor::new(&text);
        for term in cursor.by_ref() {
            term.expand(self);
        }
        cursor.exhausted()
    }

    /// Canonicalizes every pair, sorts into range order and drops duplicates.
    pub fn finish(self) -> Range {
        let n = self.raw.len();
        let mut combos = self
            .raw
            .into_iter()
            .map(Combo::from)
            .collect::<Vec<Combo>>();
        combos.sort_unstable();
        combos.dedup();
        log::debug!("range built from {} raw pairs, {} unique", n, combos.len());
        Range::frozen(combos)
    }
}
