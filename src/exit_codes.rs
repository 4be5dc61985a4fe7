//! Exit code constants for the ooo-reply CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid input)
//! - 2: Configuration error (unreadable or invalid config file)
//! - 3: I/O failure (could not write the generated reply)
//!
//! A failed AI generation is not an exit condition: it falls back to the
//! templates and still exits with `SUCCESS`.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid input values.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config file missing, unparsable, or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// I/O failure: writing the output file failed.
pub const IO_FAILURE: i32 = 3;
