//! Shared output layer for pretty/text/JSON parity across commands.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` flag
//! 2. `RELNAV_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY,
//!    [`OutputMode::Text`] if piped.

use std::env;
use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use serde::Serialize;

/// Shared width for pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty output.
///
/// # Errors
///
/// Propagates writer errors.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Render a left-aligned key/value line.
///
/// # Errors
///
/// Propagates writer errors.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, visual framing).
    Pretty,
    /// Token-efficient plain text for agents and pipes.
    Text,
    /// Machine-readable JSON, one document per command.
    Json,
}

impl OutputMode {
    /// Resolve the effective mode from the flag, env, and TTY state.
    #[must_use]
    pub fn resolve(flag: Option<Self>) -> Self {
        if let Some(mode) = flag {
            return mode;
        }
        match env::var("RELNAV_FORMAT").as_deref() {
            Ok("pretty") => Self::Pretty,
            Ok("text") => Self::Text,
            Ok("json") => Self::Json,
            _ if io::stdout().is_terminal() => Self::Pretty,
            _ => Self::Text,
        }
    }

    /// True when JSON output was requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Emit `value` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization or writing fails.
pub fn emit_json<T: Serialize>(value: &T, w: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}
