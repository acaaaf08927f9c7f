//! ui::output
//!
//! Output configuration and display.
//!
//! # Design
//!
//! There is no process-wide logger. The CLI builds one [`Output`] from the
//! parsed flags and hands it to every component that prints, so verbosity and
//! color travel as plain data instead of global state.
//!
//! Plan lines and warnings go to stderr; the closing summary goes to stdout.
//! Color applies only to the source/destination halves of plan lines and
//! resolves to off when stderr is not an interactive terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use colored::Colorize;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - summary and warnings only
    Normal,
    /// Debug mode - per-pair rename plans
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    ///
    /// A dry run exists to show the operator what would happen, so it raises
    /// verbosity to debug on its own.
    pub fn from_flags(debug: bool, dry_run: bool) -> Self {
        if debug || dry_run {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Resolved output configuration for one run.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbosity: Verbosity,
    color: bool,
}

impl Output {
    /// Resolve the output configuration from CLI flags.
    ///
    /// Color is only honored when stderr (the stream plan lines go to) is an
    /// interactive terminal.
    pub fn from_flags(colorize: bool, debug: bool, dry_run: bool) -> Self {
        let color = colorize && io::stderr().is_terminal();
        if color {
            // `colored` consults its own stdout heuristic; follow the
            // resolved flag instead so stderr plan lines stay colored when
            // stdout is piped.
            colored::control::set_override(true);
        }

        Self {
            verbosity: Verbosity::from_flags(debug, dry_run),
            color,
        }
    }

    /// An uncolored configuration at the given verbosity.
    pub fn plain(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: false,
        }
    }

    /// Print a message to stdout.
    pub fn print(&self, message: impl Display) {
        println!("{}", message);
    }

    /// Print a debug message (only in debug mode).
    pub fn debug(&self, message: impl Display) {
        if self.verbosity == Verbosity::Debug {
            eprintln!("[debug] {}", message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: impl Display) {
        eprintln!("warning: {}", message);
    }

    /// Paint a rename source path for display.
    pub fn source(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Paint a rename destination path for display.
    pub fn destination(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_verbosity() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Debug);
    }

    #[test]
    fn dry_run_implies_debug() {
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
    }

    #[test]
    fn no_flags_means_normal() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn painters_pass_through_without_color() {
        let out = Output::plain(Verbosity::Normal);
        assert_eq!(out.source("qnl/001"), "qnl/001");
        assert_eq!(out.destination("qnl/BK1_000001"), "qnl/BK1_000001");
    }

    #[test]
    fn painters_wrap_when_color_enabled() {
        colored::control::set_override(true);
        let out = Output {
            verbosity: Verbosity::Normal,
            color: true,
        };

        let painted = out.source("qnl/001");
        assert_ne!(painted, "qnl/001");
        assert!(painted.contains("qnl/001"));
        assert!(painted.contains('\u{1b}'));

        colored::control::unset_override();
    }

    #[test]
    fn non_terminal_stderr_disables_color() {
        // Only meaningful where stderr is already not a terminal, as in any
        // piped or CI run; skip when attached to one.
        if io::stderr().is_terminal() {
            return;
        }

        let out = Output::from_flags(true, false, false);
        assert_eq!(out.source("qnl/001"), "qnl/001");
    }
}
