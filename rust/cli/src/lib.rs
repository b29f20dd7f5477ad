//! # fairverify CLI Library
//!
//! Command-line front end for the fairverify engine: recompute shuffled
//! decks, drawn numbers and winning hands from revealed seeds, and check
//! published rounds against them.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["fairverify", "verify", "--input", "rounds.jsonl"];
//! let code = fairverify_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deck`: Shuffle a deck from seeds and print its Merkle root
//! - `rng`: Derive a lottery or roulette number
//! - `eval`: Find the best hand from hole and community cards
//! - `verify`: Check round records against a recomputation
//! - `bench`: Time best-hand searches
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, FairverifyCli};
use commands::{
    VerifyOptions, handle_bench_command, handle_cfg_command, handle_deck_command,
    handle_eval_command, handle_rng_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["deck", "rng", "eval", "verify", "bench", "cfg"];

fn exit_code_for(e: &CliError) -> i32 {
    match e {
        CliError::Mismatch(_) => exit_code::MISMATCH,
        _ => exit_code::ERROR,
    }
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code_for(&e)
        }
    }
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `1` when verification finds mismatches and
/// `fail_on_mismatch` is set, `2` for errors.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["fairverify", "rng", "--server-seed", "11", "--public-seed", "22", "--odds", "2"];
/// let code = fairverify_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 2);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FairverifyCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: fairverify <command> [options]\n").is_err()
                        || writeln!(err, "Commands: {}", COMMANDS.join(", ")).is_err()
                    {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    if let Commands::Cfg = cli.cmd {
        return finish(handle_cfg_command(out), err);
    }

    let config = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&config.log_level);
    tracing::debug!(command = cli.cmd.name(), "dispatching");
    let ascii = formatters::use_ascii(config.ascii);

    let result = match cli.cmd {
        Commands::Deck {
            server_seed,
            client_seeds,
            leaves,
        } => handle_deck_command(server_seed, &client_seeds, leaves, ascii, out),
        Commands::Rng {
            server_seed,
            public_seed,
            odds,
            roulette,
        } => handle_rng_command(&server_seed, &public_seed, odds, roulette, out),
        Commands::Eval { hole, community } => handle_eval_command(&hole, &community, ascii, out),
        Commands::Verify { input, json } => handle_verify_command(
            &input,
            VerifyOptions {
                json,
                ascii,
                fail_on_mismatch: config.fail_on_mismatch,
            },
            out,
            err,
        ),
        Commands::Bench { rounds, seed } => handle_bench_command(rounds, seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };
    finish(result, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_parses() {
        let commands = vec![
            vec!["fairverify", "cfg"],
            vec!["fairverify", "deck"],
            vec!["fairverify", "deck", "--server-seed", "ab", "--client-seed", "cd", "--client-seed", "ef"],
            vec!["fairverify", "rng", "--server-seed", "a", "--public-seed", "b", "--odds", "3"],
            vec!["fairverify", "eval", "--hole", "As,Ks", "--community", "Qs,Js,Ts"],
            vec!["fairverify", "verify", "--input", "r.jsonl", "--json"],
            vec!["fairverify", "bench", "--rounds", "5"],
        ];
        for cmd_args in commands {
            let parsed = FairverifyCli::try_parse_from(&cmd_args);
            assert!(parsed.is_ok(), "Failed to parse: {:?}", cmd_args);
            assert!(COMMANDS.contains(&parsed.unwrap().cmd.name()));
        }
    }

    #[test]
    fn test_client_seeds_keep_order() {
        let cli = FairverifyCli::try_parse_from([
            "fairverify",
            "deck",
            "--client-seed",
            "b",
            "--client-seed",
            "a",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Deck { client_seeds, .. } => assert_eq!(client_seeds, vec!["b", "a"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rng_requires_odds() {
        assert!(
            FairverifyCli::try_parse_from(["fairverify", "rng", "--server-seed", "a", "--public-seed", "b"])
                .is_err()
        );
    }

    #[test]
    fn test_mismatch_maps_to_exit_one() {
        assert_eq!(exit_code_for(&CliError::Mismatch("x".into())), 1);
        assert_eq!(exit_code_for(&CliError::InvalidInput("x".into())), 2);
    }
}
