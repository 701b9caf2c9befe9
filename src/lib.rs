//! Starting-hand ranges for Texas Hold'em.
//!
//! Parses the compact range notation used in hand-range analysis
//! (`"QQ+,AKs,T9o,7c6c"`) into the canonical, duplicate-free list of
//! two-card combinations it denotes, and converts cards between their string,
//! index and bitmask encodings.
//!
//! ## Cards
//!
//! - [`Rank`](cards::Rank), [`Suit`](cards::Suit) : the two halves of a card
//! - [`Card`](cards::Card) : dense index `rank * 4 + suit` in `0..52`
//! - [`Hand`](cards::Hand) : card mask, one bit per card index
//! - [`EvalMask`](cards::EvalMask) : the external evaluator's suit-lane layout
//! - [`codec`](cards::codec) : free functions over raw integers and strings
//!
//! ## Ranges
//!
//! - [`Range`](range::Range) : immutable, sorted, unique set of combinations
//! - [`Combo`](range::Combo) : two distinct cards in canonical order
//! - [`Cursor`](range::Cursor) : backtracking term parser
//! - [`Builder`](range::Builder) : raw pair buffer behind every `Range`
pub mod cards;
pub mod range;

// ============================================================================
// DECK
// ============================================================================
/// Number of distinct ranks, Two through Ace.
pub const N_RANKS: usize = 13;
/// Number of suits.
pub const N_SUITS: usize = 4;
/// Cards in a full deck.
pub const N_CARDS: usize = N_RANKS * N_SUITS;
/// Unordered pairs of distinct cards, 52 choose 2.
pub const N_COMBOS: usize = N_CARDS * (N_CARDS - 1) / 2;

// ============================================================================
// EXPRESSIONS
// ============================================================================
/// Whole-expression literal for every combination in the deck.
pub const RANDOM: &str = "random";
/// Term separator.
pub const SEPARATOR: char = ',';

/// Lowercases and drops everything that is not a visible ASCII character.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_graphic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, or at the level named by `RUST_LOG`.
#[cfg(feature = "logging")]
pub fn log() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_sizes() {
        assert_eq!(N_CARDS, 52);
        assert_eq!(N_COMBOS, 1326);
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize(" A K s,\tq\nQ\u{7} "), "aks,qq");
        assert_eq!(normalize("RANDOM"), RANDOM);
        assert_eq!(normalize("\u{2660}As"), "as");
    }
}
