//! Stable exit codes for `prompt-feedback` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, config, or other errors.
pub const INVALID: i32 = 1;
/// `prompt-feedback analyze` scored below the configured minimum.
pub const BELOW_THRESHOLD: i32 = 2;
