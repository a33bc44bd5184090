//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI while the app runs, so `tracing` output is
//! written to a plain-text log file (default:
//! `~/.local/share/productivity-tui/productivity-tui.log`). When logging is
//! disabled no subscriber is installed and every `tracing` macro is a no-op.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    if let Some(parent) = config.file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file.display()))?;

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.level))
        .try_init();
    Ok(())
}

/// Unknown level names fall back to `info`.
fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
