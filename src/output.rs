//! # Terminal Output
//!
//! Decides how the one-line status report looks and whether a spinner runs
//! while the archive downloads.
//!
//! Colour is chosen by `--color`. In `auto` mode the usual environment
//! conventions apply, in this order:
//! - `NO_COLOR` set (to anything, even empty) turns colour off
//! - `CLICOLOR=0` turns colour off
//! - `CLICOLOR_FORCE` set to a non-zero value turns colour on
//! - `TERM=dumb` turns colour off
//! - otherwise colour follows whether stdout is a colour-capable terminal
//!
//! Without colour, status markers fall back to bracketed ASCII tags.

use std::env;
use std::ffi::OsString;
use std::time::Duration;

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// How status lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolves `choice` against the process environment and stdout.
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => color_from_env(
                |key| env::var_os(key),
                console::Term::stdout().features().colors_supported(),
            ),
        };
        Self { use_color }
    }
}

/// Applies the `auto` rules to an environment lookup.
///
/// `terminal_colors` is the fallback when no variable decides.
fn color_from_env<F>(lookup: F, terminal_colors: bool) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if lookup("NO_COLOR").is_some() {
        return false;
    }
    if lookup("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }
    if lookup("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if lookup("TERM").is_some_and(|v| v == "dumb") {
        return false;
    }
    terminal_colors
}

/// Leading marker of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
}

impl Status {
    /// The marker for this status under `config`.
    pub fn marker(self, config: &OutputConfig) -> &'static str {
        match (self, config.use_color) {
            (Status::Ok, true) => "✅",
            (Status::Ok, false) => "[OK]",
            (Status::Warn, true) => "⚠️",
            (Status::Warn, false) => "[WARN]",
        }
    }
}

/// Starts a spinner on stderr with `message`.
///
/// Returns a hidden bar when `visible` is false or stderr is not a terminal,
/// so callers can finish it unconditionally.
pub fn spinner(visible: bool, message: String) -> ProgressBar {
    if !visible || !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
