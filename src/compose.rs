//! Reply orchestration: template mode, AI mode, and the fallback between them.
//!
//! Template mode calls the engine directly. AI mode asks a
//! [`ContentGenerator`] first; whatever goes wrong there (transport, status,
//! malformed JSON, missing body) the reply is rebuilt from the templates with
//! the same inputs and carries [`FALLBACK_NOTICE`].

use crate::ai::{ContentGenerator, GenerationRequest};
use crate::config::Mode;
use crate::engine::{GeneratedContent, VariantPicker, render_content, render_subject_with};
use serde::Serialize;
use tracing::{info, warn};

/// Shown to the user when an AI draft was replaced by a template.
pub const FALLBACK_NOTICE: &str = "AI generation failed; here's a template instead!";

/// Where the final reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Template,
    Ai,
    Fallback,
}

/// A generated reply plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Produce a reply in the requested mode.
///
/// `generator` is only consulted in [`Mode::Ai`]; passing `None` there
/// behaves like a failed generation.
pub fn compose(
    mode: Mode,
    request: &GenerationRequest,
    generator: Option<&dyn ContentGenerator>,
    picker: &mut dyn VariantPicker,
) -> Reply {
    match (mode, generator) {
        (Mode::Template, _) => compose_template(request, picker),
        (Mode::Ai, Some(generator)) => compose_ai(request, generator, picker),
        (Mode::Ai, None) => {
            warn!("AI mode requested without a generator");
            fallback(request, picker)
        }
    }
}

/// Build a reply from the templates only.
pub fn compose_template(request: &GenerationRequest, picker: &mut dyn VariantPicker) -> Reply {
    info!(tone = %request.tone, "rendering template reply");
    Reply {
        content: render_content(&request.inputs, request.tone.id(), picker),
        source: ContentSource::Template,
        notice: None,
    }
}

/// Ask the generator for a draft, falling back to the templates on failure.
pub fn compose_ai(
    request: &GenerationRequest,
    generator: &dyn ContentGenerator,
    picker: &mut dyn VariantPicker,
) -> Reply {
    match generator.generate(request) {
        Ok(draft) => {
            let subject = if draft.subject.trim().is_empty() {
                render_subject_with(request.tone.id(), &request.inputs.reason, picker)
            } else {
                draft.subject
            };
            Reply {
                content: GeneratedContent {
                    subject,
                    body: draft.body,
                },
                source: ContentSource::Ai,
                notice: None,
            }
        }
        Err(err) => {
            warn!(error = %err, "AI generation failed; falling back to template");
            fallback(request, picker)
        }
    }
}

fn fallback(request: &GenerationRequest, picker: &mut dyn VariantPicker) -> Reply {
    Reply {
        content: render_content(&request.inputs, request.tone.id(), picker),
        source: ContentSource::Fallback,
        notice: Some(FALLBACK_NOTICE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::GenerationError;
    use crate::engine::{SequencePicker, render_body, subject_candidates};
    use crate::presets::Spice;
    use crate::test_support::{FailingGenerator, FixedGenerator, alex_inputs};
    use crate::tone::Tone;

    fn request(tone: Tone) -> GenerationRequest {
        GenerationRequest {
            inputs: alex_inputs(),
            tone,
            spice: Spice::default(),
        }
    }

    #[test]
    fn template_mode_ignores_generator() {
        let generator = FixedGenerator::new("AI subject", "AI body");
        let mut picker = SequencePicker::new(vec![0]);
        let reply = compose(
            Mode::Template,
            &request(Tone::Professional),
            Some(&generator),
            &mut picker,
        );
        assert_eq!(reply.source, ContentSource::Template);
        assert_eq!(reply.content.subject, "Out of Office: Vacation");
        assert_eq!(reply.content.body, render_body(&alex_inputs(), "professional"));
        assert!(reply.notice.is_none());
    }

    #[test]
    fn ai_success_uses_draft() {
        let generator = FixedGenerator::new("Gone sailing", "Ahoy, I be away.");
        let mut picker = SequencePicker::new(vec![0]);
        let reply = compose(Mode::Ai, &request(Tone::Pirate), Some(&generator), &mut picker);
        assert_eq!(reply.source, ContentSource::Ai);
        assert_eq!(reply.content.subject, "Gone sailing");
        assert_eq!(reply.content.body, "Ahoy, I be away.");
        assert!(reply.notice.is_none());
    }

    #[test]
    fn ai_draft_without_subject_gets_template_subject() {
        let generator = FixedGenerator::new("", "Ahoy, I be away.");
        let mut picker = SequencePicker::new(vec![1]);
        let reply = compose(Mode::Ai, &request(Tone::Pirate), Some(&generator), &mut picker);
        assert_eq!(reply.source, ContentSource::Ai);
        assert_eq!(reply.content.subject, "Ahoy! Captain is off ship");
        assert!(reply.notice.is_none());
    }

    #[test]
    fn every_failure_kind_falls_back_with_notice() {
        let failures = [
            GenerationError::MissingApiKey("ANTHROPIC_API_KEY".to_string()),
            GenerationError::Status {
                status: 529,
                message: "overloaded".to_string(),
            },
            GenerationError::MalformedResponse("not json".to_string()),
            GenerationError::MissingField("body"),
        ];

        for failure in failures {
            let generator = FailingGenerator::new(failure);
            let mut picker = SequencePicker::new(vec![0]);
            let reply = compose(Mode::Ai, &request(Tone::Haiku), Some(&generator), &mut picker);

            assert_eq!(reply.source, ContentSource::Fallback);
            assert_eq!(reply.notice.as_deref(), Some(FALLBACK_NOTICE));
            assert_eq!(reply.content.body, render_body(&alex_inputs(), "haiku"));
            assert!(subject_candidates("haiku", "Vacation").contains(&reply.content.subject));
        }
    }

    #[test]
    fn ai_mode_without_generator_falls_back() {
        let mut picker = SequencePicker::new(vec![0]);
        let reply = compose(Mode::Ai, &request(Tone::GenZ), None, &mut picker);
        assert_eq!(reply.source, ContentSource::Fallback);
        assert!(reply.notice.is_some());
    }

    #[test]
    fn reply_serializes_flat() {
        let reply = Reply {
            content: GeneratedContent {
                subject: "S".to_string(),
                body: "B".to_string(),
            },
            source: ContentSource::Fallback,
            notice: Some(FALLBACK_NOTICE.to_string()),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["subject"], "S");
        assert_eq!(value["body"], "B");
        assert_eq!(value["source"], "fallback");
        assert_eq!(value["notice"], FALLBACK_NOTICE);
    }
}
