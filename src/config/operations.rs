//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
use crate::error::{OooError, Result};
use crate::presets::Spice;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(OooError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            OooError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from an explicit path, `$OOO_REPLY_CONFIG`, or the default
    /// file in the working directory, in that order.
    ///
    /// An explicitly named file must exist. The default file is optional:
    /// when it is absent, defaults are used.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        Self::load_resolved(resolve_path(explicit, std::env::var_os(CONFIG_PATH_ENV)))
    }

    /// Load an already resolved path, or the optional default file when
    /// nothing was named.
    pub(crate) fn load_resolved(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    debug!(path = %path.display(), "loading config");
                    Self::load(path)
                } else {
                    debug!("no config file; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Path `load_from` would read (or write, for `config init`).
    pub fn path_for(explicit: Option<&Path>) -> PathBuf {
        resolve_path(explicit, std::env::var_os(CONFIG_PATH_ENV))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| OooError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            OooError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `spice` must be between 1 and 5
    /// - `ai.base_url` and `ai.model` must be non-empty
    /// - `ai.max_tokens` and `ai.timeout_seconds` must be positive
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Spice::new(self.spice) {
            return Err(OooError::ConfigError(format!(
                "config validation failed: {}",
                e
            )));
        }

        if self.ai.base_url.trim().is_empty() {
            return Err(OooError::ConfigError(
                "config validation failed: ai.base_url must not be empty".to_string(),
            ));
        }

        if self.ai.model.trim().is_empty() {
            return Err(OooError::ConfigError(
                "config validation failed: ai.model must not be empty".to_string(),
            ));
        }

        if self.ai.max_tokens == 0 {
            return Err(OooError::ConfigError(
                "config validation failed: ai.max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.ai.timeout_seconds == 0 {
            return Err(OooError::ConfigError(
                "config validation failed: ai.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Pick the config file named on the command line, else the one named by
/// the environment value. An empty environment value counts as unset.
pub(crate) fn resolve_path(explicit: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env.filter(|p| !p.is_empty()).map(PathBuf::from))
}
