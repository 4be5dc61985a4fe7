//! Preset reasons and spice levels offered to the user.

use crate::engine::VariantPicker;
use crate::error::{OooError, Result};
use crate::tone::Tone;

/// Reason label that means "use the custom reason text instead".
pub const OTHER_REASON: &str = "Other";

/// Preset absence reasons, in display order.
pub const REASONS: [&str; 10] = [
    "Vacation",
    "Conference",
    "Parental Leave",
    "Sick Day",
    "Mental Health Day",
    "Sabbatical",
    "Jury Duty",
    "Witness Protection",
    "Alien Abduction",
    OTHER_REASON,
];

/// Labels for spice levels 1 through 5.
pub const SPICE_LABELS: [&str; 5] = ["Mild 🌱", "Warm 🌶️", "Medium 🔥", "Hot 🌋", "Unhinged 💥"];

/// Default spice level.
pub const DEFAULT_SPICE: u8 = 3;

/// Pick the reason that actually goes into the reply.
///
/// Selecting [`OTHER_REASON`] (case-insensitively) swaps in the custom text,
/// which may be empty; the engine substitutes its own default in that case.
pub fn resolve_reason(reason: &str, custom: &str) -> String {
    if reason.trim().eq_ignore_ascii_case(OTHER_REASON) {
        custom.trim().to_string()
    } else {
        reason.trim().to_string()
    }
}

/// Intensity of the AI-written reply, 1 (mild) to 5 (unhinged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Spice(u8);

impl Spice {
    pub fn new(level: u8) -> Result<Self> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(OooError::UserError(format!(
                "spice level must be between 1 and 5 (got {})",
                level
            )))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        SPICE_LABELS[usize::from(self.0 - 1)]
    }
}

impl Default for Spice {
    fn default() -> Self {
        Self(DEFAULT_SPICE)
    }
}

/// Pick a tone other than `current`, uniformly among the remaining seven.
pub fn random_other_tone(current: Tone, picker: &mut dyn VariantPicker) -> Tone {
    let others: Vec<Tone> = Tone::ALL.into_iter().filter(|t| *t != current).collect();
    others[picker.pick(others.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SequencePicker;

    #[test]
    fn reasons_include_standard_and_fun_options() {
        assert!(REASONS.contains(&"Vacation"));
        assert!(REASONS.contains(&"Parental Leave"));
        assert!(REASONS.contains(&"Alien Abduction"));
        assert_eq!(REASONS.last(), Some(&OTHER_REASON));
    }

    #[test]
    fn other_uses_custom_reason() {
        assert_eq!(resolve_reason("Other", "Moving house"), "Moving house");
        assert_eq!(resolve_reason("other", "  Moving house "), "Moving house");
        assert_eq!(resolve_reason("Other", ""), "");
    }

    #[test]
    fn preset_reason_ignores_custom() {
        assert_eq!(resolve_reason("Vacation", "Moving house"), "Vacation");
        assert_eq!(resolve_reason("", "ignored"), "");
    }

    #[test]
    fn spice_bounds() {
        assert!(Spice::new(0).is_err());
        assert!(Spice::new(6).is_err());
        assert_eq!(Spice::new(1).unwrap().label(), "Mild 🌱");
        assert_eq!(Spice::new(5).unwrap().label(), "Unhinged 💥");
        assert_eq!(Spice::default().level(), 3);
    }

    #[test]
    fn random_tone_never_repeats_current() {
        let mut picker = SequencePicker::new(vec![0, 1, 2, 3, 4, 5, 6]);
        for _ in 0..7 {
            let tone = random_other_tone(Tone::Pirate, &mut picker);
            assert_ne!(tone, Tone::Pirate);
        }
    }
}
