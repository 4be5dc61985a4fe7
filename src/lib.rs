//! ooo-reply: out-of-office auto-reply generator.
//!
//! The heart of the crate is [`engine`], a pure, synchronous renderer that
//! turns [`engine::TripInputs`] and a tone into a subject line and a body
//! using the static [`template`] catalog. [`ai`] drafts replies through a
//! remote model instead, and [`compose`] falls back to the engine whenever
//! that fails.
//!
//! ```
//! use ooo_reply::engine::{TripInputs, render_body, subject_candidates, render_subject};
//!
//! let inputs = TripInputs {
//!     name: "Alex".to_string(),
//!     start_date: "2025-08-01".to_string(),
//!     ..Default::default()
//! };
//! let body = render_body(&inputs, "pirate");
//! assert!(body.contains("starting Aug 1, 2025"));
//!
//! let subject = render_subject("pirate", "Vacation");
//! assert!(subject_candidates("pirate", "Vacation").contains(&subject));
//! ```

pub mod ai;
pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod dates;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod presets;
pub mod template;
pub mod tone;

#[cfg(test)]
pub(crate) mod test_support;
