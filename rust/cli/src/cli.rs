//! Command-line argument types for the `fairverify` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fairverify",
    version,
    about = "Recompute and check provably-fair game rounds"
)]
pub struct FairverifyCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a deck from server and client seeds and print its Merkle root
    Deck {
        /// Server seed as 64 hex characters; random when omitted
        #[arg(long)]
        server_seed: Option<String>,
        /// Client seed, repeated in join order
        #[arg(long = "client-seed")]
        client_seeds: Vec<String>,
        /// Also print every leaf hash
        #[arg(long)]
        leaves: bool,
    },
    /// Derive the random number for a jackpot, coinflip or roulette round
    Rng {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        public_seed: String,
        /// Number of outcomes; the pot total for jackpot rounds
        #[arg(long)]
        odds: u64,
        /// Map the number onto the roulette wheel
        #[arg(long)]
        roulette: bool,
    },
    /// Find the best hand from two hole cards and the community cards
    Eval {
        #[arg(long)]
        hole: String,
        #[arg(long)]
        community: String,
    },
    /// Verify round records from a JSON, JSON array or JSONL file
    Verify {
        #[arg(long)]
        input: String,
        /// Emit reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time best-hand searches over seeded decks
    Bench {
        #[arg(long, default_value_t = 200)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Deck { .. } => "deck",
            Commands::Rng { .. } => "rng",
            Commands::Eval { .. } => "eval",
            Commands::Verify { .. } => "verify",
            Commands::Bench { .. } => "bench",
            Commands::Cfg => "cfg",
        }
    }
}
