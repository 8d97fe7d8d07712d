//! Command-line interface: argument parsing, caller-side validation,
//! dispatch into the analysis engine.

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::analyze::analyze_range;
use crate::cards::{parse_board, Card};
use crate::display;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::ranges::{self, FULL_GRID};

#[derive(Parser)]
#[command(
    name = "flopscope",
    version,
    about = "Classify every combo of a preflop range against a flop"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a range against a 3-card board
    Analyze {
        /// Comma-separated combo tokens ("AA,AKs,T9o"), or "all" for the
        /// full 13x13 grid
        #[arg(short, long)]
        range: String,

        /// Board as three concatenated cards, e.g. "Ks9d4c"
        #[arg(short, long)]
        board: String,

        /// Emit a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Expand a single combo token into its concrete combinations
    Expand {
        /// Combo token, e.g. "AKs", "77", "T9o"
        token: String,
    },
}

/// Board must hold exactly 3 distinct cards, validated here before the
/// engine is invoked.
fn parse_flop(s: &str) -> AnalyzeResult<[Card; 3]> {
    let cards = parse_board(s)?;
    match <[Card; 3]>::try_from(cards) {
        Ok(flop) => Ok(flop),
        Err(cards) => Err(AnalyzeError::InvalidBoard(format!(
            "expected exactly 3 cards, got {}",
            cards.len()
        ))),
    }
}

fn split_range(spec: &str) -> AnalyzeResult<Vec<String>> {
    let tokens: Vec<String> = if spec.eq_ignore_ascii_case("all") {
        FULL_GRID.clone()
    } else {
        spec.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    };
    if tokens.is_empty() {
        return Err(AnalyzeError::EmptyRange);
    }
    Ok(tokens)
}

fn dispatch(cli: Cli) -> AnalyzeResult<()> {
    match cli.command {
        Command::Analyze { range, board, json } => {
            let tokens = split_range(&range)?;
            let flop = parse_flop(&board)?;
            let analysis = analyze_range(&tokens, &flop)?;

            if json {
                let report = display::build_report(&analysis, &flop);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_default()
                );
            } else {
                display::print_analysis(&analysis, &flop, ranges::raw_combo_count(&tokens));
            }
            Ok(())
        }
        Command::Expand { token } => {
            display::print_expansion(&token, &ranges::parse_combo(&token));
            Ok(())
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = dispatch(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flop_requires_exactly_three_cards() {
        assert!(parse_flop("Ks9d4c").is_ok());
        assert!(parse_flop("Ks9d").is_err());
        assert!(parse_flop("Ks9d4c2h").is_err());
    }

    #[test]
    fn range_spec_splits_and_trims() {
        let tokens = split_range("AA, AKs ,T9o").unwrap();
        assert_eq!(tokens, vec!["AA", "AKs", "T9o"]);
    }

    #[test]
    fn range_spec_all_selects_the_grid() {
        let tokens = split_range("all").unwrap();
        assert_eq!(tokens.len(), 169);
    }

    #[test]
    fn empty_range_spec_rejected() {
        assert_eq!(split_range(" , ,"), Err(AnalyzeError::EmptyRange));
        assert_eq!(split_range(""), Err(AnalyzeError::EmptyRange));
    }
}
