//! Verify command handler module.
//!
//! Reads round records and recomputes each one from its revealed seeds:
//!
//! - server seed commitment
//! - deck order and Merkle root for poka rounds
//! - claimed card ownership and client seed membership
//! - drawn number or roulette outcome for lottery rounds
//! - winners and winner count
//!
//! Input is a single JSON object, a JSON array, or JSONL. Records that cannot
//! be decoded or recomputed are collected as `BatchValidationError`s keyed by
//! their 1-based position and fail the command with exit code `2`. Mismatched
//! checks fail it with exit code `1` when `fail_on_mismatch` is set.

use crate::error::{BatchValidationError, CliError};
use crate::formatters::{format_best_hand, format_check};
use crate::io_utils::read_text_auto;
use crate::ui;
use fairverify_engine::records::RoundRecord;
use fairverify_engine::verify::{Summary, VerificationReport, verify_round};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

type RecordError = BatchValidationError<usize>;

#[derive(Debug, Clone, Copy)]
pub struct VerifyOptions {
    pub json: bool,
    pub ascii: bool,
    pub fail_on_mismatch: bool,
}

fn split_records(content: &str) -> Vec<Result<Value, String>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => items.into_iter().map(Ok).collect(),
        Ok(single) => vec![Ok(single)],
        Err(_) => trimmed
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str::<Value>(l).map_err(|e| format!("Invalid JSON: {}", e)))
            .collect(),
    }
}

fn decode_and_verify(item: Result<Value, String>) -> Result<VerificationReport, String> {
    let value = item?;
    let record: RoundRecord =
        serde_json::from_value(value).map_err(|e| format!("Invalid round record: {}", e))?;
    verify_round(&record).map_err(|e| format!("Cannot recompute round: {}", e))
}

fn write_report(
    out: &mut dyn Write,
    index: usize,
    report: &VerificationReport,
    ascii: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Round {} ({}): {} checks, {} mismatches",
        report.round_id.as_deref().unwrap_or(&format!("#{}", index)),
        report.game,
        report.checks.len(),
        report.mismatches().len()
    )?;
    for check in &report.checks {
        writeln!(out, "  {}", format_check(check, ascii))?;
    }
    match &report.summary {
        Summary::Poka(poka) => {
            writeln!(out, "  Merkle root: {}", poka.merkle_root)?;
            writeln!(out, "  Winners: {}", poka.winners.join(", "))?;
            if !poka.eliminated.is_empty() {
                writeln!(out, "  Eliminated: {}", poka.eliminated.join(", "))?;
            }
            if let Some(best) = &poka.best_hand {
                writeln!(out, "  Best hand: {}", format_best_hand(best, ascii))?;
            }
        }
        Summary::Lottery(lottery) => {
            writeln!(out, "  Random number: {}", lottery.random_number)?;
            if let Some(outcome) = lottery.roulette_outcome {
                writeln!(
                    out,
                    "  Roulette outcome: {} ({:?})",
                    outcome.index(),
                    outcome.color()
                )?;
            }
            writeln!(out, "  Winners: {}", lottery.winners.join(", "))?;
        }
    }
    Ok(())
}

pub fn handle_verify_command(
    input: &str,
    options: VerifyOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(CliError::InvalidInput)?;
    let items = split_records(&content);
    if items.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no round records in {}",
            input
        )));
    }

    let mut errors: Vec<RecordError> = Vec::new();
    let mut verified = 0usize;
    let mut mismatched = 0usize;

    for (i, item) in items.into_iter().enumerate() {
        let index = i + 1;
        let report = match decode_and_verify(item) {
            Ok(r) => r,
            Err(message) => {
                warn!(record = index, %message, "skipping record");
                errors.push(RecordError {
                    item_context: index,
                    message,
                });
                continue;
            }
        };
        verified += 1;
        if !report.all_match() {
            mismatched += 1;
        }
        debug!(record = index, game = %report.game, ok = report.all_match(), "record checked");

        if options.json {
            let line = serde_json::to_string(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            write_report(out, index, &report, options.ascii)?;
        }
    }

    for e in &errors {
        ui::write_error(err, &format!("record {}", e))?;
    }
    if !options.json {
        writeln!(
            out,
            "Verified {} rounds: {} mismatched, {} invalid",
            verified,
            mismatched,
            errors.len()
        )?;
    }

    if !errors.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} of {} records could not be verified",
            errors.len(),
            verified + errors.len()
        )));
    }
    if mismatched > 0 {
        if options.fail_on_mismatch {
            return Err(CliError::Mismatch(format!(
                "{} of {} rounds do not match their published data",
                mismatched, verified
            )));
        }
        ui::display_warning(
            err,
            &format!("{} of {} rounds do not match", mismatched, verified),
        )?;
    }
    Ok(())
}
