//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Pass/fail marker for a check line.
pub fn check_mark(ok: bool, ascii: bool) -> &'static str {
    match (ok, ascii) {
        (true, false) => "✓",
        (false, false) => "✗",
        (true, true) => "ok",
        (false, true) => "FAIL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_prefixed() {
        let mut err = Vec::new();
        display_warning(&mut err, "line 3 skipped").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "WARNING: line 3 skipped\n");
    }

    #[test]
    fn marks_follow_ascii_mode() {
        assert_eq!(check_mark(true, false), "✓");
        assert_eq!(check_mark(false, true), "FAIL");
    }
}
