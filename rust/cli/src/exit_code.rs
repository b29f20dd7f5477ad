//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Published data did not match the recomputation.
pub const MISMATCH: i32 = 1;

/// General error exit code.
pub const ERROR: i32 = 2;
