//! The closed set of voices a reply can be written in.
//!
//! Tone identifiers arrive as free text (CLI flags, config files). Parsing is
//! strict via [`Tone::from_id`]; [`Tone::resolve`] is the lenient variant the
//! generation engine uses, mapping anything unrecognized to
//! [`Tone::Professional`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named register/voice selecting which template content to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Plain corporate auto-reply (the fallback tone).
    #[default]
    Professional,
    Friendly,
    Hilarious,
    PassiveAggressive,
    Mysterious,
    Pirate,
    Haiku,
    GenZ,
}

impl Tone {
    /// All tones, in display order.
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Hilarious,
        Tone::PassiveAggressive,
        Tone::Mysterious,
        Tone::Pirate,
        Tone::Haiku,
        Tone::GenZ,
    ];

    /// Parse a tone from its identifier. Returns `None` for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "professional" => Some(Self::Professional),
            "friendly" => Some(Self::Friendly),
            "hilarious" => Some(Self::Hilarious),
            "passive_aggressive" => Some(Self::PassiveAggressive),
            "mysterious" => Some(Self::Mysterious),
            "pirate" => Some(Self::Pirate),
            "haiku" => Some(Self::Haiku),
            "gen_z" => Some(Self::GenZ),
            _ => None,
        }
    }

    /// Resolve any identifier to a tone, falling back to `Professional`.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    /// Stable identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Hilarious => "hilarious",
            Self::PassiveAggressive => "passive_aggressive",
            Self::Mysterious => "mysterious",
            Self::Pirate => "pirate",
            Self::Haiku => "haiku",
            Self::GenZ => "gen_z",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Friendly => "Friendly",
            Self::Hilarious => "Hilarious",
            Self::PassiveAggressive => "Passive-Aggressive",
            Self::Mysterious => "Mysterious",
            Self::Pirate => "Pirate",
            Self::Haiku => "Haiku",
            Self::GenZ => "Gen Z",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Professional => "👔",
            Self::Friendly => "😊",
            Self::Hilarious => "🤣",
            Self::PassiveAggressive => "🙃",
            Self::Mysterious => "🕵️",
            Self::Pirate => "🏴‍☠️",
            Self::Haiku => "🎋",
            Self::GenZ => "💀",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
