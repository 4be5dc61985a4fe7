//! Configuration types and defaults for ooo-reply.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".ooo-reply.yaml";

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "OOO_REPLY_CONFIG";

/// Messages API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// How a reply is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Deterministic templates only (default, works offline).
    #[default]
    Template,
    /// Ask the text-generation service, falling back to templates.
    Ai,
}

impl Mode {
    /// Parse a mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "template" => Some(Self::Template),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }
}

/// Settings for the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Base URL; `/v1/messages` is appended. Point this at a proxy to keep
    /// the key out of the environment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
            api_key_env: default_api_key_env(),
        }
    }
}

pub(super) fn default_spice() -> u8 {
    crate::presets::DEFAULT_SPICE
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}
