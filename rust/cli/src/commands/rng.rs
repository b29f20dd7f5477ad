//! Random number derivation command.
//!
//! Recomputes the number a jackpot or coinflip round drew from its revealed
//! server seed and public seed. With `--roulette` the number is mapped onto
//! the fifteen-pocket wheel and the paying bets are listed.

use crate::error::CliError;
use crate::validation::parse_seed;
use fairverify_engine::rng::{RouletteBet, random_number, resolve_outcome};
use std::io::Write;

const BETS: [RouletteBet; 4] = [
    RouletteBet::Jackpot,
    RouletteBet::Yellow,
    RouletteBet::Blue,
    RouletteBet::Pattern,
];

pub fn handle_rng_command(
    server_seed: &str,
    public_seed: &str,
    odds: u64,
    roulette: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let server = parse_seed(server_seed).map_err(CliError::InvalidInput)?;
    let public = parse_seed(public_seed).map_err(CliError::InvalidInput)?;
    let number = random_number(&server, &public, odds);
    writeln!(out, "Random number: {} (odds {})", number, odds)?;

    if roulette {
        let outcome = resolve_outcome(number);
        writeln!(
            out,
            "Roulette outcome: {} ({:?}{})",
            outcome.index(),
            outcome.color(),
            if outcome.is_pattern() { ", pattern" } else { "" }
        )?;
        let paying: Vec<&str> = BETS
            .iter()
            .filter(|b| b.covers(outcome))
            .map(|b| b.label())
            .collect();
        writeln!(out, "Paying bets: {}", paying.join(", "))?;
    }
    Ok(())
}
