//! Configuration command handler.
//!
//! Prints every configuration value with its source (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "ascii": {
//!     "value": false,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let display = serde_json::json!({
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        },
        "fail_on_mismatch": {
            "value": config.fail_on_mismatch,
            "source": sources.fail_on_mismatch,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
