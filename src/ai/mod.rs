//! AI drafting through a remote text-generation service.
//!
//! This module is deliberately separate from [`crate::engine`]: it owns the
//! prompt, the HTTP call and the response parsing, and reports every failure
//! as a [`GenerationError`]. Deciding what to do about a failure (falling back
//! to the templates) is the job of [`crate::compose`].

mod client;
mod error;
mod prompt;
mod response;

pub use client::AnthropicClient;
pub use error::GenerationError;
pub use prompt::build_prompt;
pub use response::{parse_draft, parse_response};

use crate::engine::{GeneratedContent, TripInputs};
use crate::presets::Spice;
use crate::tone::Tone;

/// Everything the service needs to draft a reply.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub inputs: TripInputs,
    pub tone: Tone,
    pub spice: Spice,
}

/// Something that can draft a reply, possibly failing.
///
/// Implementations may leave `subject` empty when the service did not supply
/// one; the caller fills it from the templates.
pub trait ContentGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, GenerationError>;
}
