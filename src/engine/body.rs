//! Message-body generation.

use super::fill;
use super::types::TripInputs;
use crate::dates::format_date;
use crate::template::{lookup, vars};

const NAME_PLACEHOLDER: &str = "[Your Name]";
const BACKUP_PLACEHOLDER: &str = "[backup contact]";
const DEFAULT_REASON: &str = "personal reasons";
const OPEN_ENDED: &str = "for a while";
const UNKNOWN_RETURN: &str = "soon";

/// Input values after placeholder substitution, ready for interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub name: String,
    pub dates: String,
    pub return_date: String,
    pub reason: String,
    pub backup: String,
}

impl ResolvedInputs {
    pub fn from_inputs(inputs: &TripInputs) -> Self {
        let start = format_date(&inputs.start_date);
        let end = format_date(&inputs.end_date);

        let dates = match (start.is_empty(), end.is_empty()) {
            (false, false) => format!("{} through {}", start, end),
            (false, true) => format!("starting {}", start),
            _ => OPEN_ENDED.to_string(),
        };
        let return_date = if end.is_empty() {
            UNKNOWN_RETURN.to_string()
        } else {
            end
        };

        Self {
            name: or_placeholder(&inputs.name, NAME_PLACEHOLDER),
            dates,
            return_date,
            reason: or_placeholder(&inputs.reason, DEFAULT_REASON),
            backup: or_placeholder(&inputs.backup, BACKUP_PLACEHOLDER),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Render the message body for `tone`. Deterministic; unknown tones use the
/// professional template.
pub fn render_body(inputs: &TripInputs, tone: &str) -> String {
    let resolved = ResolvedInputs::from_inputs(inputs);
    let reason_lower = resolved.reason.to_lowercase();
    let vars = vars([
        ("name", resolved.name.as_str()),
        ("dates", resolved.dates.as_str()),
        ("return_date", resolved.return_date.as_str()),
        ("reason", resolved.reason.as_str()),
        ("reason_lower", reason_lower.as_str()),
        ("backup", resolved.backup.as_str()),
    ]);
    fill(lookup(tone).body, &vars)
}
