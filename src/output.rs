//! Verbosity-aware output for potoken-cli.
//!
//! All user-facing output goes through an `Output` value constructed once
//! in main() from the parsed flags and passed by reference everywhere.
//! Silent is the default; forced messages, warnings, and errors are always
//! shown regardless of it.

use colored::Colorize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Verbose,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbosity: Verbosity,
}

impl Output {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Progress detail. Shown only in verbose mode.
    pub fn info(&self, msg: impl Display) {
        if self.is_verbose() {
            println!("{msg}");
        }
    }

    /// Important status line. Always shown, even in silent mode.
    pub fn forced(&self, msg: impl Display) {
        println!("{msg}");
    }

    /// Completion indicator. Always shown.
    pub fn success(&self, msg: impl Display) {
        println!("{} {}", "✔".green(), msg);
    }

    /// Non-fatal warning. Always shown, goes to stderr.
    pub fn warn(&self, msg: impl Display) {
        eprintln!("{} {}", "Warning:".yellow().bold(), msg);
    }

    /// Fatal error. Always shown, goes to stderr.
    pub fn error(&self, msg: impl Display) {
        eprintln!("{} {}", "Error:".red().bold(), msg);
    }
}
