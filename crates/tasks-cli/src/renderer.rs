//! Terminal rendering module for rich output
//!
//! This module provides terminal rendering capabilities using termimad
//! with optional fallback to plain text. Only the fixed labels and markers
//! produced by the core display types are styled; the rest of each line,
//! including task descriptions, is written verbatim.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Line prefixes that receive styling in rich mode.
const STATUS_LABELS: [&str; 2] = ["Warning:", "Error:"];
const TASK_MARKERS: [&str; 2] = ["✓", "○"];

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render text to stdout, one line at a time
    pub fn render(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, text)?;
        out.flush()?;
        Ok(())
    }

    /// Render any displayable value
    pub fn render_display(&self, value: &impl std::fmt::Display) -> Result<()> {
        self.render(&value.to_string())
    }

    /// Render text into `out`.
    pub fn render_to<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{text}")?;
            return Ok(());
        }

        for line in text.lines() {
            if let Some(label) = STATUS_LABELS.iter().find(|l| line.starts_with(*l)) {
                let rest = &line[label.len()..];
                writeln!(out, "{}{rest}", self.skin.bold.apply_to(*label))?;
            } else if let Some(marker) = TASK_MARKERS.iter().find(|m| line.starts_with(*m)) {
                let rest = &line[marker.len()..];
                writeln!(out, "{}{rest}", self.skin.italic.apply_to(*marker))?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
