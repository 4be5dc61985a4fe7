//! Subject-line generation.

use super::fill;
use super::picker::{ThreadRngPicker, VariantPicker};
use crate::template::{lookup, vars};
use std::collections::HashMap;
use tracing::debug;

const DEFAULT_REASON: &str = "time off";
const DEFAULT_REASON_LABEL: &str = "Away";

/// Pick a random subject line for `tone` mentioning `reason`.
///
/// Unknown tones use the professional variants. Never returns an empty string.
pub fn render_subject(tone: &str, reason: &str) -> String {
    render_subject_with(tone, reason, &mut ThreadRngPicker)
}

/// Like [`render_subject`], but with an explicit source of randomness.
pub fn render_subject_with(tone: &str, reason: &str, picker: &mut dyn VariantPicker) -> String {
    let subjects = lookup(tone).subjects;
    let index = picker.pick(subjects.len());
    debug!(tone, index, variants = subjects.len(), "picked subject variant");
    fill(subjects[index], &subject_vars(reason))
}

/// Every subject [`render_subject`] can return for this `(tone, reason)` pair.
pub fn subject_candidates(tone: &str, reason: &str) -> Vec<String> {
    let vars = subject_vars(reason);
    lookup(tone)
        .subjects
        .iter()
        .map(|template| fill(template, &vars))
        .collect()
}

fn subject_vars(reason: &str) -> HashMap<String, String> {
    let (lowered, label) = if reason.is_empty() {
        (DEFAULT_REASON.to_string(), DEFAULT_REASON_LABEL)
    } else {
        (reason.to_lowercase(), reason)
    };
    vars([("reason", lowered.as_str()), ("reason_label", label)])
}
