//! Config struct definition and default implementation.

use super::types::*;
use crate::tone::Tone;
use serde::{Deserialize, Serialize};

/// Configuration for ooo-reply.
///
/// This struct represents the contents of `.ooo-reply.yaml`. Every field is
/// optional; unknown fields in the YAML are ignored for forward compatibility.
/// Values given on the command line win over values from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Reply defaults
    // =========================================================================
    /// Name used in the sign-off.
    #[serde(default)]
    pub name: String,

    /// Who to contact while away.
    #[serde(default)]
    pub backup: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub mode: Mode,

    /// AI intensity, 1 through 5.
    #[serde(default = "default_spice")]
    pub spice: u8,

    // =========================================================================
    // AI settings
    // =========================================================================
    #[serde(default)]
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            backup: String::new(),
            tone: Tone::default(),
            mode: Mode::default(),
            spice: default_spice(),
            ai: AiConfig::default(),
        }
    }
}
