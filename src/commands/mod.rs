//! Command implementations for ooo-reply.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. `generate` lives in its own module; the small listing
//! and config commands are implemented here.

mod generate;

pub use generate::{GenerateJob, build_job};

use crate::cli::{Command, ConfigAction, ConfigCommand, ConfigInitArgs, SubjectArgs};
use crate::config::Config;
use crate::engine::{render_subject, subject_candidates};
use crate::error::{OooError, Result};
use crate::output::atomic_write_file;
use crate::presets::REASONS;
use crate::tone::Tone;
use std::path::Path;
use tracing::warn;

/// Dispatch a command to its implementation.
///
/// `config_path` is the global `--config` flag, if given.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, config_path),
        Command::Subject(args) => cmd_subject(args, config_path),
        Command::Tones => cmd_tones(),
        Command::Reasons => cmd_reasons(),
        Command::Config(config_cmd) => dispatch_config(config_cmd, config_path),
    }
}

/// Dispatch config subcommands.
fn dispatch_config(config_cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match config_cmd.action {
        ConfigAction::Init(args) => cmd_config_init(args, config_path),
        ConfigAction::Show => cmd_config_show(config_path),
    }
}

fn cmd_subject(args: SubjectArgs, config_path: Option<&Path>) -> Result<()> {
    let tone_id = match args.tone {
        Some(id) => {
            if Tone::from_id(&id).is_none() {
                warn!(tone = %id, "unknown tone; using professional");
            }
            id
        }
        None => Config::load_from(config_path)?.tone.id().to_string(),
    };

    if args.all {
        for subject in subject_candidates(&tone_id, &args.reason) {
            println!("{}", subject);
        }
    } else {
        println!("{}", render_subject(&tone_id, &args.reason));
    }
    Ok(())
}

fn cmd_tones() -> Result<()> {
    for line in tone_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn tone_lines() -> Vec<String> {
    Tone::ALL
        .iter()
        .map(|tone| format!("{:<20} {} {}", tone.id(), tone.emoji(), tone.label()))
        .collect()
}

fn cmd_reasons() -> Result<()> {
    for reason in REASONS {
        println!("{}", reason);
    }
    Ok(())
}

fn cmd_config_init(args: ConfigInitArgs, config_path: Option<&Path>) -> Result<()> {
    let path = Config::path_for(config_path);
    if path.exists() && !args.force {
        return Err(OooError::UserError(format!(
            "config file '{}' already exists.\n\n\
             To overwrite it with defaults, run:\n  ooo-reply config init --force",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    atomic_write_file(&path, &yaml)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
