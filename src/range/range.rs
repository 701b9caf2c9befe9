use super::builder::Builder;
use super::combo::Combo;
use crate::cards::Card;

/// A duplicate-free, canonically ordered set of starting hands.
///
/// Built once, from an expression, from raw card pairs, or empty, and never
/// modified afterwards. Expressions are case-insensitive and ignore
/// whitespace:
///
/// ```text
/// K4     all suited and offsuit combinations of K and 4
/// K4s    suited only
/// K4o    offsuit only
/// KcQd   one specific combination
/// K4+    K4 and every better kicker: K4, K5, .., KQ
/// 44+    pocket fours and every higher pair
/// random all 1326 combinations
/// ```
///
/// Terms are joined with `,`. Parsing is lenient: it stops quietly at the
/// first term it cannot read and keeps everything before it. Use
/// [`Range::strict`] to reject such input instead.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range(Vec<Combo>);

impl Range {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Wraps combinations that are already canonical, sorted and unique.
    pub(super) fn frozen(combos: Vec<Combo>) -> Self {
        debug_assert!(combos.windows(2).all(|w| w[0] < w[1]));
        Self(combos)
    }

    /// Parses an expression, failing if any of it is left unread.
    pub fn strict(text: &str) -> anyhow::Result<Self> {
        let mut builder = Builder::default();
        match builder.parse(text) {
            true => Ok(builder.finish()),
            false => {
                log::warn!("rejecting range expression {:?}", text);
                Err(anyhow::anyhow!("unparseable range expression: {}", text))
            }
        }
    }

    /// Combinations in range order.
    pub fn combos(&self) -> &[Combo] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Combo> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, combo: &Combo) -> bool {
        self.0.binary_search(combo).is_ok()
    }
}

/// lenient expression parsing
impl From<&str> for Range {
    fn from(text: &str) -> Self {
        let mut builder = Builder::default();
        builder.parse(text);
        builder.finish()
    }
}
impl From<String> for Range {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// raw pairs in any order. a card paired with itself panics
impl From<Vec<(Card, Card)>> for Range {
    fn from(pairs: Vec<(Card, Card)>) -> Self {
        let mut builder = Builder::default();
        for (a, b) in pairs {
            builder.push(a, b);
        }
        builder.finish()
    }
}
impl From<&[[u8; 2]]> for Range {
    fn from(pairs: &[[u8; 2]]) -> Self {
        let mut builder = Builder::default();
        for [a, b] in pairs {
            builder.push(Card::from(*a), Card::from(*b));
        }
        builder.finish()
    }
}

impl FromIterator<Combo> for Range {
    fn from_iter<I: IntoIterator<Item = Combo>>(iter: I) -> Self {
        let mut builder = Builder::default();
        for combo in iter {
            builder.push(combo.hi(), combo.lo());
        }
        builder.finish()
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = &'a Combo;
    type IntoIter = std::slice::Iter<'a, Combo>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// comma-joined combinations. this is itself a valid expression
impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, combo) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", crate::SEPARATOR)?;
            }
            write!(f, "{}", combo)?;
        }
        Ok(())
    }
}
