//! Range notation expansion: combo tokens into concrete hole-card pairs.
//!
//! Tokens follow standard grid notation: "TT" (pocket pair), "AKs"
//! (suited), "T9o" (offsuit). Malformed tokens expand to nothing;
//! parsing is tolerant by design so a range-wide pass never aborts on
//! a single bad entry.

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::cards::{Card, Rank, ALL_RANKS, ALL_SUITS};

/// All 169 canonical tokens of the 13x13 range grid, row-major from the
/// Ace row/column down: pairs on the diagonal, suited above it, offsuit
/// below it (high rank always first).
pub static FULL_GRID: Lazy<Vec<String>> = Lazy::new(|| {
    let mut tokens = Vec::with_capacity(169);
    for (i, row) in ALL_RANKS.iter().rev().enumerate() {
        for (j, col) in ALL_RANKS.iter().rev().enumerate() {
            if i == j {
                tokens.push(format!("{}{}", row.to_char(), col.to_char()));
            } else if i < j {
                tokens.push(format!("{}{}s", row.to_char(), col.to_char()));
            } else {
                tokens.push(format!("{}{}o", col.to_char(), row.to_char()));
            }
        }
    }
    tokens
});

/// Expand a combo token into every concrete hole-card pair it denotes.
///
/// Pocket pairs yield C(4,2) = 6 combos, suited tokens 4, offsuit tokens
/// 12. Any token outside the grammar (wrong length, unknown rank char,
/// missing or wrong marker, identical ranks with a marker) yields an
/// empty list rather than an error.
pub fn parse_combo(token: &str) -> Vec<(Card, Card)> {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        // Pocket pair: "TT"
        [r1, r2] if r1 == r2 => {
            let Some(rank) = Rank::from_char(*r1) else {
                return Vec::new();
            };
            ALL_SUITS
                .iter()
                .tuple_combinations()
                .map(|(&s1, &s2)| (Card::new(rank, s1), Card::new(rank, s2)))
                .collect()
        }
        // Suited: "AKs", one combo per suit
        [r1, r2, 's'] if r1 != r2 => {
            let (Some(hi), Some(lo)) = (Rank::from_char(*r1), Rank::from_char(*r2)) else {
                return Vec::new();
            };
            ALL_SUITS
                .iter()
                .map(|&s| (Card::new(hi, s), Card::new(lo, s)))
                .collect()
        }
        // Offsuit: "AKo", every ordered pair of distinct suits
        [r1, r2, 'o'] if r1 != r2 => {
            let (Some(hi), Some(lo)) = (Rank::from_char(*r1), Rank::from_char(*r2)) else {
                return Vec::new();
            };
            ALL_SUITS
                .iter()
                .cartesian_product(ALL_SUITS.iter())
                .filter(|(s1, s2)| s1 != s2)
                .map(|(&s1, &s2)| (Card::new(hi, s1), Card::new(lo, s2)))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Number of concrete combos a list of tokens denotes before any board
/// filtering. Used to report what share of the 1326 starting combos a
/// range covers.
pub fn raw_combo_count<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens.iter().map(|t| parse_combo(t.as_ref()).len()).sum()
}
