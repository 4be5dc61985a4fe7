//! Configuration model for ooo-reply.
//!
//! This module defines the Config struct that represents `.ooo-reply.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
#[cfg(test)]
pub(crate) use operations::resolve_path;
pub use types::{
    AiConfig, CONFIG_PATH_ENV, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, Mode,
};
