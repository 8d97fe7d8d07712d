//! Range-level aggregation: expand tokens, drop board conflicts,
//! classify each surviving combo, and count per category.

use crate::cards::Card;
use crate::classify::{classify_hand, StrengthCategory};
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::ranges::parse_combo;

/// Aggregated classification counts for a range on a fixed flop.
///
/// The histogram is a fixed array indexed by category discriminant, so
/// absent categories read as zero and exhaustiveness is free. One combo
/// can raise several category counts but the total exactly once, so
/// category sums may exceed `total_combos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeAnalysis {
    counts: [u32; StrengthCategory::COUNT],
    total_combos: u32,
}

impl RangeAnalysis {
    pub fn count(&self, cat: StrengthCategory) -> u32 {
        self.counts[cat as usize]
    }

    pub fn total_combos(&self) -> u32 {
        self.total_combos
    }

    /// Share of valid combos holding this category, in percent.
    pub fn percentage(&self, cat: StrengthCategory) -> f64 {
        self.count(cat) as f64 / self.total_combos as f64 * 100.0
    }

    /// Categories with at least one combo, in display-precedence order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (StrengthCategory, u32)> + '_ {
        StrengthCategory::ALL
            .iter()
            .map(|&cat| (cat, self.count(cat)))
            .filter(|&(_, n)| n > 0)
    }
}

/// Analyze every combo a range denotes against a 3-card board.
///
/// Malformed tokens contribute nothing; combos sharing a card with the
/// board are excluded from histogram and total alike. Returns
/// [`AnalyzeError::NoValidCombos`] when nothing survives, so callers can
/// tell "no data" from a successful empty-looking breakdown.
pub fn analyze_range<S: AsRef<str>>(range: &[S], board: &[Card; 3]) -> AnalyzeResult<RangeAnalysis> {
    let mut counts = [0u32; StrengthCategory::COUNT];
    let mut total = 0u32;

    for token in range {
        for (c1, c2) in parse_combo(token.as_ref()) {
            if board.contains(&c1) || board.contains(&c2) {
                continue;
            }
            total += 1;
            for cat in classify_hand([c1, c2], board).iter() {
                counts[cat as usize] += 1;
            }
        }
    }

    if total == 0 {
        return Err(AnalyzeError::NoValidCombos);
    }

    Ok(RangeAnalysis {
        counts,
        total_combos: total,
    })
}
