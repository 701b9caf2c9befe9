use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

/// Which suit relationships a rank-pair term admits.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Filter {
    #[default]
    Both,
    Suited,
    Offsuit,
}

impl Filter {
    pub fn suited(&self) -> bool {
        matches!(self, Filter::Both | Filter::Suited)
    }
    pub fn offsuited(&self) -> bool {
        matches!(self, Filter::Both | Filter::Offsuit)
    }
}

/// One comma-separated term of a range expression.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Term {
    /// two explicit cards, e.g. `kcqd`
    Exact(Card, Card),
    /// two ranks in the order written, e.g. `k4`, `k4s`, `44+`
    Ranks {
        r1: Rank,
        r2: Rank,
        filter: Filter,
        plus: bool,
    },
}

/// Backtracking cursor over a normalized range expression.
///
/// Every step either consumes input and returns `Some`, or leaves the
/// position untouched and returns `None`. A failed term rewinds to where the
/// term started, so the position always sits on a term boundary.
///
/// ```text
/// range  := term (',' term)*
/// term   := rank rank suffix?
///         | rank suit rank suit
/// suffix := ('s' | 'o')? '+'?
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
    started: bool,
}

impl<'a> Cursor<'a> {
    /// Expects text that has already been through [`crate::normalize`].
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.as_bytes(),
            pos: 0,
            started: false,
        }
    }
    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn exhausted(&self) -> bool {
        self.pos >= self.text.len()
    }
    /// Unconsumed input.
    pub fn remainder(&self) -> &'a str {
        std::str::from_utf8(&self.text[self.pos..]).unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos).map(|b| *b as char)
    }
    fn rank(&mut self) -> Option<Rank> {
        let rank = Rank::try_from(self.peek()?).ok()?;
        self.pos += 1;
        Some(rank)
    }
    fn suit(&mut self) -> Option<Suit> {
        let suit = Suit::try_from(self.peek()?).ok()?;
        self.pos += 1;
        Some(suit)
    }
    fn literal(&mut self, c: char) -> bool {
        match self.peek() == Some(c) {
            true => {
                self.pos += 1;
                true
            }
            false => false,
        }
    }

    /// Parses one term, rewinding on failure.
    pub fn term(&mut self) -> Option<Term> {
        let start = self.pos;
        let term = self.attempt();
        if term.is_none() {
            self.pos = start;
        }
        term
    }
    fn attempt(&mut self) -> Option<Term> {
        let r1 = self.rank()?;
        let s1 = self.suit();
        let r2 = self.rank()?;
        match s1 {
            Some(s1) => {
                let s2 = self.suit()?;
                let c1 = Card::from((r1, s1));
                let c2 = Card::from((r2, s2));
                match c1 == c2 {
                    true => None,
                    false => Some(Term::Exact(c1, c2)),
                }
            }
            None => {
                let filter = if self.literal('o') {
                    Filter::Offsuit
                } else if self.literal('s') {
                    Filter::Suited
                } else {
                    Filter::Both
                };
                let plus = self.literal('+');
                Some(Term::Ranks {
                    r1,
                    r2,
                    filter,
                    plus,
                })
            }
        }
    }
}

/// terms in order, stopping silently at the first one that does not parse.
/// a separator is only consumed together with the term that follows it.
impl Iterator for Cursor<'_> {
    type Item = Term;
    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        if self.started && !self.literal(crate::SEPARATOR) {
            if !self.exhausted() {
                log::debug!("range parse halted before {:?}", self.remainder());
            }
            return None;
        }
        match self.term() {
            Some(term) => {
                log::trace!("range term {:?}", term);
                self.started = true;
                Some(term)
            }
            None => {
                self.pos = start;
                if !self.exhausted() {
                    log::debug!("range parse halted before {:?}", self.remainder());
                }
                None
            }
        }
    }
}
