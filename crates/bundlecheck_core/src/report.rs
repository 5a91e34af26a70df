//! Report event seam for human-readable status lines.
//!
//! # Responsibility
//! - Define the typed form of every status line the validator emits.
//! - Keep the stdout report swappable so tests observe events directly.
//!
//! # Invariants
//! - One event maps to exactly one printed line.
//! - Event text matches the established verification output format.

use crate::check::balance::BalanceViolation;
use std::fmt::{Display, Formatter};

/// One human-readable verification status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Path exists on disk.
    Found { path: String },
    /// Path is absent from disk.
    Missing { path: String },
    /// Script file scanned clean.
    SyntaxOk { path: String },
    /// Script file failed the balance scan.
    SyntaxError {
        path: String,
        violation: BalanceViolation,
    },
    /// File is present but could not be read; warns and fails the check.
    Unreadable { path: String, message: String },
    /// Manifest could not be parsed.
    InvalidManifest { path: String, message: String },
    /// Verification phase header.
    Section { title: String },
}

impl Display for ReportEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { path } => write!(f, "✅ Found: {path}"),
            Self::Missing { path } => write!(f, "❌ MISSING: {path}"),
            Self::SyntaxOk { path } => write!(f, "✅ Syntax OK: {path}"),
            Self::SyntaxError { path, violation } => {
                write!(f, "❌ SYNTAX ERROR in {path}: {violation}")
            }
            Self::Unreadable { path, message } => {
                write!(f, "⚠️ Could not read {path}: {message}")
            }
            Self::InvalidManifest { path, message } => {
                write!(f, "❌ INVALID JSON: {path} ({message})")
            }
            Self::Section { title } => write!(f, "--- {title} ---"),
        }
    }
}

/// Sink for report events.
///
/// The production sink prints to stdout; tests substitute a recording
/// implementation and assert on the typed events.
pub trait Reporter {
    fn report(&mut self, event: ReportEvent);
}

/// Stdout reporter used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ReportEvent) {
        // Section headers open a new output block.
        if matches!(event, ReportEvent::Section { .. }) {
            println!();
        }
        println!("{event}");
    }
}
