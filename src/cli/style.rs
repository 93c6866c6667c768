//! Terminal styling for CLI output
//!
//! Colors are applied only when the target stream supports them.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Success marker
pub const CHECK: &str = "✓";
/// Action marker
pub const ARROW: &str = "→";
/// No-op marker
pub const CIRCLE: &str = "○";

/// Semantic styles for anything printable
pub trait Stylize {
    /// De-emphasized text (paths, hints)
    fn muted(&self) -> String;
    /// Bold text (headings, IDs)
    fn emphasis(&self) -> String;
    /// Highlighted values (branches, names)
    fn accent(&self) -> String;
    /// Success text
    fn success(&self) -> String;
    /// Warning text
    fn warn(&self) -> String;
    /// Error label, styled for stderr
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    fn warn(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }

    fn error(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled arrow
pub fn arrow() -> String {
    ARROW.emphasis()
}

/// Spinner style for long-running steps
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}
