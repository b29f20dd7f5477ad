//! Hand evaluation command.
//!
//! Searches every pairing of two hole cards with three community cards and
//! prints the strongest five-card hand, its score and comparators.

use crate::error::CliError;
use crate::formatters::{format_best_hand, format_board};
use crate::validation::{parse_cards, parse_cards_after};
use fairverify_engine::hand::best_hand_from_cards;
use fairverify_engine::round::WinningHand;
use fairverify_engine::verify::BestHandSummary;
use std::io::Write;

pub fn handle_eval_command(
    hole: &str,
    community: &str,
    ascii: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_cards(hole).map_err(|e| CliError::InvalidInput(format!("hole: {}", e)))?;
    let community = parse_cards_after(community, &hole)
        .map_err(|e| CliError::InvalidInput(format!("community: {}", e)))?;

    let best = best_hand_from_cards(&hole, &community)?;
    let summary = BestHandSummary::from(&WinningHand::from(best));

    writeln!(out, "Hole: {}", format_board(&hole, ascii))?;
    writeln!(out, "Community: {}", format_board(&community, ascii))?;
    writeln!(out, "Best hand: {}", format_best_hand(&summary, ascii))?;
    writeln!(out, "Comparators: {:?}", summary.comparators)?;
    Ok(())
}
