//! Argument parsing and validation for the commands.
//!
//! Card lists are comma or whitespace separated and accept card numbers
//! (`0`..`53`), labels with a suit letter or symbol (`As`, `10♥`) and `GOLD`.

use fairverify_engine::cards::{Card, GOLD_VALUES};
use fairverify_engine::seed::Seed;

/// Parse a card list such as `"As, Kd 52"`.
///
/// # Example
///
/// ```rust
/// # use fairverify_cli::validation::parse_cards;
/// let cards = parse_cards("As,10d GOLD").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(cards[2].is_gold());
/// assert!(parse_cards("As,As").is_err());
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, String> {
    parse_cards_after(input, &[])
}

/// Parse a card list that must not reuse any card in `taken`.
///
/// A `GOLD` label names whichever wildcard is still free, so two `GOLD`
/// tokens resolve to cards 52 and 53.
pub fn parse_cards_after(input: &str, taken: &[Card]) -> Result<Vec<Card>, String> {
    let mut cards: Vec<Card> = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let used = |c: &Card| taken.contains(c) || cards.contains(c);
        let mut card: Card = token.parse().map_err(|e| format!("{}", e))?;
        if token.eq_ignore_ascii_case("gold") {
            let free = GOLD_VALUES
                .iter()
                .filter_map(|v| Card::new(u32::from(*v)).ok())
                .find(|c| !used(c));
            card = free.unwrap_or(card);
        }
        if used(&card) {
            return Err(format!("Duplicate card {}", token));
        }
        cards.push(card);
    }
    if cards.is_empty() {
        return Err("No cards given".to_string());
    }
    Ok(cards)
}

/// Parse a 32-byte seed given as hex, with or without a `0x` prefix.
pub fn parse_seed(input: &str) -> Result<Seed, String> {
    input
        .parse::<Seed>()
        .map_err(|e| format!("Invalid seed '{}': {}", input, e))
}

/// Validate the bench round count.
pub fn validate_rounds(rounds: u32) -> Result<(), String> {
    if rounds == 0 {
        return Err("rounds must be >= 1".to_string());
    }
    Ok(())
}
