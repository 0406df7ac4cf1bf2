//! Cargo-style status lines on stderr.
//!
//! stdout is reserved for the resolved version so shell callers can capture
//! it with `$(verso resolve ...)`; everything human-facing goes here.

use std::io::Write;

use console::Style;

/// Colour of a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Bold green, for completed actions.
    Action,
    /// Bold cyan, for informational notes.
    Info,
    /// Bold yellow, for recoverable problems.
    Warn,
}

impl Tone {
    fn style(self) -> Style {
        let style = match self {
            Tone::Action => Style::new().green(),
            Tone::Info => Style::new().cyan(),
            Tone::Warn => Style::new().yellow(),
        };
        style.bold()
    }
}

/// Format a status line: the label right-aligned to 12 columns, then the message.
pub fn format_status(tone: Tone, label: &str, message: &str) -> String {
    format!("{:>12} {message}", tone.style().apply_to(label))
}

/// Print a status line such as `    Resolved 0.10.14 for '>0.10.13'`.
pub fn status(tone: Tone, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", format_status(tone, label, message));
}
