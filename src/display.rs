//! Terminal and JSON rendering of analysis reports.
//!
//! The table mirrors the classic range-explorer breakdown: one row per
//! category holding at least one combo, with count, share of the range,
//! and a proportional bar.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::analyze::RangeAnalysis;
use crate::cards::Card;
use crate::classify::StrengthCategory;

const BAR_WIDTH: usize = 24;

/// One table/JSON row.
#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: &'static str,
    pub combos: u32,
    pub pct: f64,
}

/// Machine-readable report for `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub board: String,
    pub total_combos: u32,
    pub categories: Vec<CategoryRow>,
}

pub fn board_string(board: &[Card; 3]) -> String {
    board.iter().map(|c| c.to_string()).collect()
}

pub fn build_report(analysis: &RangeAnalysis, board: &[Card; 3]) -> JsonReport {
    JsonReport {
        board: board_string(board),
        total_combos: analysis.total_combos(),
        categories: analysis
            .iter_nonzero()
            .map(|(cat, n)| CategoryRow {
                category: cat.label(),
                combos: n,
                pct: analysis.percentage(cat),
            })
            .collect(),
    }
}

fn category_color(cat: StrengthCategory) -> Color {
    use StrengthCategory::*;
    match cat {
        Quads | FullHouse | Flush | Straight | Trips | TwoPair => Color::Green,
        TopPair | MiddlePair | BottomPair | WeakPair => Color::Cyan,
        NutFlushDraw | SecondNutFlushDraw | FlushDraw | OpenEndedStraightDraw | Gutshot => {
            Color::Yellow
        }
        Overcards => Color::Blue,
        NoMadeHand => Color::DarkGrey,
    }
}

fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    // Nonzero rows always show at least one tick
    let filled = filled.max(1);
    "█".repeat(filled)
}

pub fn analysis_table(analysis: &RangeAnalysis) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Combos", "%", ""]);

    for (cat, n) in analysis.iter_nonzero() {
        let pct = analysis.percentage(cat);
        table.add_row(vec![
            Cell::new(cat.label()).fg(category_color(cat)),
            Cell::new(n).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", pct)).set_alignment(CellAlignment::Right),
            Cell::new(bar(pct)).fg(category_color(cat)),
        ]);
    }

    table
}

/// Print the full human-readable report for an analyzed range.
///
/// `raw_combos` is the range's combo count before board filtering, used
/// for the share-of-all-hands line (1326 = C(52,2) starting combos).
pub fn print_analysis(analysis: &RangeAnalysis, board: &[Card; 3], raw_combos: usize) {
    let share = raw_combos as f64 / 1326.0 * 100.0;
    println!(
        "{} {}   {} {} combos ({:.1}% of all hands), {} valid on this flop",
        "Board:".bold(),
        board_string(board).cyan(),
        "Range:".bold(),
        raw_combos,
        share,
        analysis.total_combos()
    );
    println!("{}", analysis_table(analysis));
}

/// Print the concrete combos a single token expands to.
pub fn print_expansion(token: &str, combos: &[(Card, Card)]) {
    if combos.is_empty() {
        println!("{} expands to no combinations (malformed token?)", token.bold());
        return;
    }
    let rendered: Vec<String> = combos
        .iter()
        .map(|(c1, c2)| format!("{}{}", c1, c2))
        .collect();
    println!(
        "{} {} combos: {}",
        token.bold(),
        combos.len(),
        rendered.join(" ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_range;
    use crate::cards::parse_board;

    fn flop(s: &str) -> [Card; 3] {
        let cards = parse_board(s).unwrap();
        [cards[0], cards[1], cards[2]]
    }

    #[test]
    fn report_lists_only_nonzero_categories() {
        let board = flop("Ks9d4c");
        let analysis = analyze_range(&["AA"], &board).unwrap();
        let report = build_report(&analysis, &board);

        assert_eq!(report.board, "Ks9d4c");
        assert_eq!(report.total_combos, 6);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "Weak Pair");
        assert_eq!(report.categories[0].combos, 6);
    }

    #[test]
    fn report_serializes_to_json() {
        let board = flop("Ks9d4c");
        let analysis = analyze_range(&["AA"], &board).unwrap();
        let value = serde_json::to_value(build_report(&analysis, &board)).unwrap();

        assert_eq!(value["total_combos"], 6);
        assert_eq!(value["categories"][0]["category"], "Weak Pair");
    }

    #[test]
    fn bar_clamps_to_width() {
        assert_eq!(bar(100.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(200.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(0.01).chars().count(), 1);
    }
}
