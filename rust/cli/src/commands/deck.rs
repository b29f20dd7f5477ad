//! Deck command handler.
//!
//! Combines a server seed with the client seeds, shuffles the 54-card deck
//! and prints the Merkle commitment alongside every position. Without a
//! server seed a random one is drawn, which makes the command usable for
//! previewing what a table commits to.

use crate::error::CliError;
use crate::formatters::format_card;
use crate::validation::parse_seed;
use fairverify_engine::merkle::generate_deck;
use fairverify_engine::seed::{Seed, combine_seeds};
use std::io::Write;

pub fn handle_deck_command(
    server_seed: Option<String>,
    client_seeds: &[String],
    leaves: bool,
    ascii: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let server = match server_seed {
        Some(s) => parse_seed(&s).map_err(CliError::InvalidInput)?,
        None => Seed::from(rand::random::<[u8; 32]>()),
    };
    let clients = client_seeds
        .iter()
        .map(|s| parse_seed(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::InvalidInput)?;

    let combined = combine_seeds(&server, &clients);
    let generated = generate_deck(&combined)?;
    tracing::debug!(clients = clients.len(), root = %generated.root, "generated deck");

    writeln!(out, "Server seed: {}", server)?;
    writeln!(out, "Commitment: {}", server.commitment())?;
    writeln!(out, "Client seeds: {}", clients.len())?;
    writeln!(out, "Combined seed: {}", combined)?;
    writeln!(out, "Merkle root: {}", generated.root)?;
    writeln!(out, "Deck:")?;
    for (i, card) in generated.deck.iter().enumerate() {
        if leaves {
            writeln!(
                out,
                "{:>3}: {:>2} {:<4} {}",
                i,
                card.value(),
                format_card(*card, ascii),
                generated.leaves[i]
            )?;
        } else {
            writeln!(
                out,
                "{:>3}: {:>2} {}",
                i,
                card.value(),
                format_card(*card, ascii)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> (Option<String>, Vec<String>) {
        (
            Some("11".repeat(32)),
            vec!["22".repeat(32), "33".repeat(32)],
        )
    }

    #[test]
    fn test_deck_command_prints_reference_root() {
        let (server, clients) = seeds();
        let mut out = Vec::new();
        handle_deck_command(server, &clients, false, true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(
            "Merkle root: b6d23756e0110d53334d1ede8e5c985e1fa9ebe0d25e5df24b316d3a56297dd2"
        ));
        assert!(output.contains("  0: 26 8h"));
        assert_eq!(output.lines().count(), 6 + 54);
    }

    #[test]
    fn test_deck_command_with_leaves() {
        let (server, clients) = seeds();
        let mut out = Vec::new();
        handle_deck_command(server, &clients, true, true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(
            output.contains("229968d3bef3bc3c0c3d28934b0c629839b47899b019ca665b54bc0bed5677e6")
        );
    }

    #[test]
    fn test_deck_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_deck_command(None, &[], false, false, &mut out);
        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Client seeds: 0"));
    }

    #[test]
    fn test_deck_command_rejects_short_seed() {
        let mut out = Vec::new();
        let result = handle_deck_command(Some("abcd".into()), &[], false, false, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
