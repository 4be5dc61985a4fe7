//! CLI argument parsing for ooo-reply.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ooo-reply: write out-of-office auto-replies in the tone of your choice.
///
/// Replies come from built-in templates, or from an AI model with the
/// templates as a safety net:
/// - 8 tones, from professional to pirate
/// - subject lines picked at random from each tone's variants
/// - missing details replaced with sensible placeholders
#[derive(Parser, Debug)]
#[command(name = "ooo-reply")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $OOO_REPLY_CONFIG or ./.ooo-reply.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ooo-reply.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a subject line and message body.
    ///
    /// Missing values come from the config file; anything still missing
    /// is replaced with a placeholder in the reply.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Re-roll just the subject line.
    Subject(SubjectArgs),

    /// List available tones.
    Tones,

    /// List preset absence reasons.
    Reasons,

    /// Config file management.
    Config(ConfigCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Your name, used in the sign-off.
    #[arg(short, long)]
    pub name: Option<String>,

    /// First day away (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<String>,

    /// Last day away (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<String>,

    /// Reason for being away: a preset (see `reasons`) or free text.
    #[arg(short, long)]
    pub reason: Option<String>,

    /// Reason text used when --reason is "Other".
    #[arg(long)]
    pub custom_reason: Option<String>,

    /// Who to contact in the meantime.
    #[arg(short, long)]
    pub backup: Option<String>,

    /// Extra context for the AI (ignored by templates).
    #[arg(long)]
    pub notes: Option<String>,

    /// Tone id (see `tones`). Unknown ids fall back to professional.
    #[arg(short, long, conflicts_with = "random_tone")]
    pub tone: Option<String>,

    /// Pick a random tone other than the configured one.
    #[arg(long)]
    pub random_tone: bool,

    /// Generation mode: template or ai.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// AI intensity from 1 (mild) to 5 (unhinged).
    #[arg(long)]
    pub spice: Option<u8>,

    /// Output format: text or json.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also write the reply to this file.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `subject` command.
#[derive(Parser, Debug)]
pub struct SubjectArgs {
    /// Tone id. Unknown ids fall back to professional.
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Reason for being away.
    #[arg(short, long, default_value = "")]
    pub reason: String,

    /// Print every possible subject instead of a random one.
    #[arg(long)]
    pub all: bool,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a config file with default values.
    Init(ConfigInitArgs),

    /// Print the effective configuration.
    Show,
}

/// Arguments for the `config init` command.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
