//! Error types for the ooo-reply CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The generation engine itself never fails; these errors only come from the
//! edges (argument handling, config loading, writing output).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for ooo-reply operations.
#[derive(Error, Debug)]
pub enum OooError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or validated.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Writing the generated reply failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl OooError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OooError::UserError(_) => exit_codes::USER_ERROR,
            OooError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            OooError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for ooo-reply operations.
pub type Result<T> = std::result::Result<T, OooError>;
