//! Implementation of the `ooo-reply generate` command.
//!
//! Merges command-line values over config defaults, validates them, runs the
//! composer in the chosen mode and prints (and optionally saves) the reply.

use crate::ai::{AnthropicClient, ContentGenerator, GenerationRequest};
use crate::cli::GenerateArgs;
use crate::compose::compose;
use crate::config::{Config, Mode};
use crate::dates::parse_iso_date;
use crate::engine::{ThreadRngPicker, TripInputs, VariantPicker};
use crate::error::{OooError, Result};
use crate::output::{OutputFormat, atomic_write_file};
use crate::presets::{Spice, random_other_tone, resolve_reason};
use crate::tone::Tone;
use std::path::Path;
use tracing::{info, warn};

/// A fully resolved generation job.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    pub mode: Mode,
    pub format: OutputFormat,
    pub request: GenerationRequest,
}

/// Execute the `generate` command.
pub fn cmd_generate(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let mut picker = ThreadRngPicker;
    let job = build_job(&args, &config, &mut picker)?;

    let client;
    let generator: Option<&dyn ContentGenerator> = match job.mode {
        Mode::Ai => {
            client = AnthropicClient::from_config(&config.ai);
            Some(&client)
        }
        Mode::Template => None,
    };

    let reply = compose(job.mode, &job.request, generator, &mut picker);
    info!(source = ?reply.source, tone = %job.request.tone, "reply ready");

    if let Some(notice) = &reply.notice {
        eprintln!("Note: {}", notice);
    }

    let rendered = job.format.render(&reply)?;
    print!("{}", rendered);

    if let Some(out) = &args.out {
        atomic_write_file(out, &rendered)?;
        eprintln!("Saved to {}", out.display());
    }

    Ok(())
}

/// Resolve arguments against config into a generation job.
///
/// Precedence is command line, then config, then empty. Unknown tone ids
/// are accepted and resolve to professional.
pub fn build_job(
    args: &GenerateArgs,
    config: &Config,
    picker: &mut dyn VariantPicker,
) -> Result<GenerateJob> {
    let start_date = validated_date("--start", args.start.as_deref())?;
    let end_date = validated_date("--end", args.end.as_deref())?;
    if let (Some(start), Some(end)) = (parse_iso_date(&start_date), parse_iso_date(&end_date))
        && end < start
    {
        return Err(OooError::UserError(format!(
            "--end ({}) is before --start ({})",
            end_date, start_date
        )));
    }

    let inputs = TripInputs {
        name: pick(args.name.as_deref(), &config.name),
        start_date,
        end_date,
        reason: resolve_reason(
            args.reason.as_deref().unwrap_or_default(),
            args.custom_reason.as_deref().unwrap_or_default(),
        ),
        backup: pick(args.backup.as_deref(), &config.backup),
        notes: args.notes.clone().unwrap_or_default(),
    };

    let tone = if args.random_tone {
        random_other_tone(config.tone, picker)
    } else {
        match args.tone.as_deref() {
            Some(id) => {
                if Tone::from_id(id).is_none() {
                    warn!(tone = id, "unknown tone; using professional");
                }
                Tone::resolve(id)
            }
            None => config.tone,
        }
    };

    let mode = match args.mode.as_deref() {
        Some(raw) => Mode::from_str(raw).ok_or_else(|| {
            OooError::UserError(format!(
                "unknown mode '{}'. Valid modes: template, ai",
                raw
            ))
        })?,
        None => config.mode,
    };

    let format = match args.format.as_deref() {
        Some(raw) => OutputFormat::from_str(raw).ok_or_else(|| {
            OooError::UserError(format!(
                "unknown format '{}'. Valid formats: text, json",
                raw
            ))
        })?,
        None => OutputFormat::Text,
    };

    let spice = Spice::new(args.spice.unwrap_or(config.spice))?;

    Ok(GenerateJob {
        mode,
        format,
        request: GenerationRequest {
            inputs,
            tone,
            spice,
        },
    })
}

fn pick(arg: Option<&str>, fallback: &str) -> String {
    arg.unwrap_or(fallback).trim().to_string()
}

fn validated_date(flag: &str, value: Option<&str>) -> Result<String> {
    let value = value.unwrap_or_default().trim();
    if value.is_empty() || parse_iso_date(value).is_some() {
        Ok(value.to_string())
    } else {
        Err(OooError::UserError(format!(
            "{} must be a date in YYYY-MM-DD form (got '{}')",
            flag, value
        )))
    }
}
