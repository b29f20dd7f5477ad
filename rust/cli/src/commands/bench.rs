//! Bench command handler.
//!
//! Shuffles one deck per round from seeds drawn off a seeded ChaCha20
//! generator, deals two hole cards and five community cards, and times the
//! best-hand search. The category tally makes runs comparable across builds.

use crate::error::CliError;
use crate::validation::validate_rounds;
use fairverify_engine::deck::Deck;
use fairverify_engine::hand::{Category, best_hand_from_cards};
use fairverify_engine::seed::Seed;
use rand::{RngCore, SeedableRng};
use std::collections::BTreeMap;
use std::io::Write;

pub fn handle_bench_command(
    rounds: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_rounds(rounds).map_err(CliError::InvalidInput)?;
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed.unwrap_or(1));
    let mut tally: BTreeMap<Category, u32> = BTreeMap::new();

    let start = std::time::Instant::now();
    for _ in 0..rounds {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let mut deck = Deck::from_seed(&Seed::from(bytes));
        let hole = deck.deal(2)?;
        let community = deck.deal(5)?;
        let best = best_hand_from_cards(&hole, &community)?;
        *tally.entry(best.evaluation.category).or_default() += 1;
    }
    let dur = start.elapsed();

    writeln!(out, "Benchmark: {} rounds in {:?}", rounds, dur)?;
    let secs = dur.as_secs_f64();
    if secs > 0.0 {
        writeln!(out, "Throughput: {:.0} searches/sec", f64::from(rounds) / secs)?;
    }
    for (category, count) in tally.iter().rev() {
        writeln!(out, "  {:<16} {}", category.name(), count)?;
    }
    Ok(())
}
