//! Card, hand and check formatters for terminal display.
//!
//! Cards print with suit symbols (`A♠`, `10♥`) unless ASCII output is
//! requested through configuration or the terminal cannot render Unicode,
//! in which case they print as `As`, `Th`. GOLD wildcards print as `GOLD`
//! in both modes.
//!
//! ## Example
//!
//! ```rust
//! use fairverify_engine::cards::{Card, Rank, Suit};
//! use fairverify_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::from_parts(Rank::Ace, Suit::Spades);
//! assert_eq!(format_card(ace_spades, true), "As");
//! assert_eq!(format_board(&[ace_spades], false), "[A♠]");
//! ```

use fairverify_engine::cards::Card;
use fairverify_engine::verify::{BestHandSummary, Check};

use crate::ui::check_mark;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// ASCII output is used when configured or when Unicode is unavailable.
pub fn use_ascii(configured: bool) -> bool {
    configured || !supports_unicode()
}

pub fn format_card(card: Card, ascii: bool) -> String {
    if ascii {
        card.ascii_label()
    } else {
        card.label()
    }
}

/// Format a list of cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card], ascii: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(*c, ascii)).collect();
    format!("[{}]", formatted.join(" "))
}

/// `One Pair [8♥ 8♣ A♦ 10♠ 6♣] (score 91)`
pub fn format_best_hand(best: &BestHandSummary, ascii: bool) -> String {
    format!(
        "{} {} (score {})",
        best.name,
        format_board(&best.cards, ascii),
        best.score
    )
}

/// One line per check: mark, field, and both values when they differ.
pub fn format_check(check: &Check, ascii: bool) -> String {
    let mark = check_mark(check.matches, ascii);
    if check.matches {
        format!("{} {}: {}", mark, check.field, check.published)
    } else {
        format!(
            "{} {}: published {}, recomputed {}",
            mark, check.field, check.published, check.recomputed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairverify_engine::cards::{Rank, Suit};

    fn check(matches: bool) -> Check {
        Check {
            field: "deck[3]".into(),
            published: "5 (3♣)".into(),
            recomputed: if matches { "5 (3♣)" } else { "6 (3♥)" }.into(),
            matches,
        }
    }

    #[test]
    fn test_format_card_modes() {
        let ten = Card::from_parts(Rank::Ten, Suit::Hearts);
        assert_eq!(format_card(ten, false), "10♥");
        assert_eq!(format_card(ten, true), "Th");
        let gold = Card::new(53).unwrap();
        assert_eq!(format_card(gold, false), "GOLD");
        assert_eq!(format_card(gold, true), "GOLD");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[], false), "[]");
    }

    #[test]
    fn test_format_board_with_cards() {
        let board = [
            Card::from_parts(Rank::Ace, Suit::Spades),
            Card::from_parts(Rank::King, Suit::Diamonds),
        ];
        assert_eq!(format_board(&board, true), "[As Kd]");
    }

    #[test]
    fn test_format_check_lines() {
        assert_eq!(format_check(&check(true), true), "ok deck[3]: 5 (3♣)");
        assert_eq!(
            format_check(&check(false), false),
            "✗ deck[3]: published 5 (3♣), recomputed 6 (3♥)"
        );
    }

    #[test]
    fn test_configured_ascii_wins() {
        assert!(use_ascii(true));
    }
}
