//! Rendering replies for the terminal and writing them to disk.
//!
//! Files are written atomically: content goes to `.{filename}.tmp` in the
//! same directory, is synced, and then renamed over the target, so an
//! interrupted run never leaves a half-written reply behind.

use crate::compose::Reply;
use crate::error::{OooError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a reply is printed and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Render a reply in this format.
    pub fn render(self, reply: &Reply) -> Result<String> {
        match self {
            Self::Text => Ok(format_text(reply)),
            Self::Json => format_json(reply),
        }
    }
}

/// Plain-text rendering: subject line, blank line, body.
pub fn format_text(reply: &Reply) -> String {
    format!(
        "Subject: {}\n\n{}\n",
        reply.content.subject, reply.content.body
    )
}

/// Pretty-printed JSON rendering, including source and notice.
pub fn format_json(reply: &Reply) -> Result<String> {
    serde_json::to_string_pretty(reply)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(serialize_failed)
}

fn serialize_failed(e: serde_json::Error) -> OooError {
    OooError::IoError(format!("failed to serialize reply: {}", e))
}

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            OooError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OooError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            OooError::IoError(format!("invalid output path '{}'", target.display()))
        })?;
    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        OooError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).and_then(|_| file.sync_all()).map_err(|e| {
        let _ = fs::remove_file(path);
        OooError::IoError(format!("failed to write temporary file: {}", e))
    })
}
