//! # fairverify-engine: Provably-Fair Round Recomputation
//!
//! Recomputes the outcome of a chance-based round from its revealed seeds so
//! it can be compared with what the ledger published. Covers the 54-card Poka
//! game (two GOLD wildcards) and the lottery-style games (jackpot, coinflip,
//! roulette). Every function is pure: no I/O, no global state.
//!
//! ## Core Modules
//!
//! - [`seed`] - 32-byte seeds, commitments and the seed combiner
//! - [`deck`] - LCG-driven deterministic shuffle
//! - [`merkle`] - Merkle commitment over the shuffled deck, with proofs
//! - [`cards`] - Card values, classification and labels
//! - [`rng`] - Seed-derived random numbers and the roulette table
//! - [`hand`] - Hand evaluation with wildcards and best-hand search
//! - [`round`] - Winner resolution across a table of players
//! - [`records`] - Decoded ledger records
//! - [`verify`] - Published-vs-recomputed verification reports
//! - [`errors`] - Error types for malformed input
//!
//! ## Quick Start
//!
//! ```rust
//! use fairverify_engine::merkle::generate_deck;
//! use fairverify_engine::seed::{combine_seeds, Seed};
//!
//! let server = Seed::from([0x11; 32]);
//! let clients = [Seed::from([0x22; 32]), Seed::from([0x33; 32])];
//! let combined = combine_seeds(&server, &clients);
//!
//! let generated = generate_deck(&combined).unwrap();
//! assert_eq!(generated.deck.len(), 54);
//! assert_eq!(
//!     generated.root.to_hex(),
//!     "b6d23756e0110d53334d1ede8e5c985e1fa9ebe0d25e5df24b316d3a56297dd2"
//! );
//! ```
//!
//! ## Hand Evaluation
//!
//! GOLD cards stand in for whatever completes the strongest hand:
//!
//! ```rust
//! use fairverify_engine::cards::Card;
//! use fairverify_engine::hand::{evaluate_hand, Category};
//!
//! let cards: Vec<Card> = ["Kh", "Kd", "Ks", "Kc", "GOLD"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let eval = evaluate_hand(&cards).unwrap();
//! assert_eq!(eval.category, Category::FiveOfAKind);
//! assert_eq!(eval.name(), "Five of a Kind");
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
mod hash;
pub mod merkle;
pub mod records;
pub mod rng;
pub mod round;
pub mod seed;
pub mod verify;

pub use hash::keccak256;
