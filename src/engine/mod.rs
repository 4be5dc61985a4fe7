//! Deterministic reply generation.
//!
//! This module turns [`TripInputs`] plus a tone identifier into a subject
//! line and a message body using the static template catalog:
//!
//! - **Subject**: one variant picked at random per call
//! - **Body**: one template per tone, no randomness
//! - **Fallback**: unknown tones behave like `professional`, empty inputs get
//!   placeholder text
//!
//! Nothing here performs I/O or can fail. The engine is also the recovery
//! path when AI generation does not work out.

mod body;
mod picker;
mod subject;
mod types;

pub use body::{ResolvedInputs, render_body};
pub use picker::{SequencePicker, ThreadRngPicker, VariantPicker};
pub use subject::{render_subject, render_subject_with, subject_candidates};
pub use types::{GeneratedContent, TripInputs};

use crate::template::render_template;
use std::collections::HashMap;
use tracing::warn;

/// Render a subject and body in one go.
pub fn render_content(
    inputs: &TripInputs,
    tone: &str,
    picker: &mut dyn VariantPicker,
) -> GeneratedContent {
    GeneratedContent {
        subject: render_subject_with(tone, &inputs.reason, picker),
        body: render_body(inputs, tone),
    }
}

/// Interpolate a catalog template. A broken catalog entry degrades to its
/// raw text instead of failing the reply.
fn fill(template: &str, vars: &HashMap<String, String>) -> String {
    render_template(template, vars).unwrap_or_else(|err| {
        warn!(error = %err, "catalog template failed to render; using raw text");
        template.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::alex_inputs;

    #[test]
    fn render_content_combines_subject_and_body() {
        let mut picker = SequencePicker::new(vec![1]);
        let content = render_content(&alex_inputs(), "friendly", &mut picker);
        assert_eq!(content.subject, "Hey! I'm away for a bit ✌️");
        assert_eq!(content.body, render_body(&alex_inputs(), "friendly"));
    }

    #[test]
    fn fill_degrades_to_raw_template() {
        let vars = HashMap::new();
        assert_eq!(fill("Hello {missing}", &vars), "Hello {missing}");
    }
}
