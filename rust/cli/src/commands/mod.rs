//! Command handler modules for the fairverify CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod bench;
mod cfg;
mod deck;
mod eval;
mod rng;
mod verify;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
pub use verify::{VerifyOptions, handle_verify_command};
