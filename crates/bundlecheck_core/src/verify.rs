//! Bundle verification service.
//!
//! # Responsibility
//! - Compose existence and balance checks over one bundle layout.
//! - Emit report lines and `event=` diagnostics for every step.
//!
//! # Invariants
//! - Handlers are checked in manifest order; one failing handler never stops
//!   the sweep (unlike the scanner's own short-circuit).
//! - Component directory checks are report-only and never affect the
//!   verdict.

use crate::check::balance::check_file_balance;
use crate::check::exists::check_path_exists;
use crate::model::manifest::BundleManifest;
use crate::report::{ReportEvent, Reporter};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Manifest file name expected at the bundle root.
pub const MANIFEST_FILE: &str = "manifest.json";
/// Handler suffix that opts a file into the balance scan.
pub const SCRIPT_SUFFIX: &str = ".dg";
/// Component directories expected in a packaged bundle.
pub const COMPONENT_DIRS: &[&str] = &["Bots", "Commands", "Widgets", "Functions"];

/// Filesystem layout of one bundle under verification.
///
/// The default layout reproduces the fixed CLI behavior: everything resolves
/// against the current working directory. Tests point `root` at a temporary
/// directory instead.
#[derive(Debug, Clone)]
pub struct BundleLayout {
    /// Directory all relative paths resolve against.
    pub root: PathBuf,
    /// Manifest path relative to `root`.
    pub manifest_path: String,
    /// Report-only component directories relative to `root`.
    pub component_dirs: Vec<String>,
    /// Handler suffix that triggers the balance scan.
    pub script_suffix: String,
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self::at(".")
    }
}

impl BundleLayout {
    /// Standard layout rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_path: MANIFEST_FILE.to_string(),
            component_dirs: COMPONENT_DIRS.iter().map(|dir| dir.to_string()).collect(),
            script_suffix: SCRIPT_SUFFIX.to_string(),
        }
    }
}

/// Verification driver over one layout and one report sink.
pub struct BundleVerifier<R: Reporter> {
    layout: BundleLayout,
    reporter: R,
}

impl<R: Reporter> BundleVerifier<R> {
    /// Creates a verifier over the given layout and report sink.
    pub fn new(layout: BundleLayout, reporter: R) -> Self {
        Self { layout, reporter }
    }

    /// Consumes the verifier, returning the report sink.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Reports existence of every expected component directory.
    ///
    /// # Contract
    /// - Report-only: the outcome never feeds the verdict.
    pub fn check_component_dirs(&mut self) {
        let mut missing = 0usize;
        for dir in &self.layout.component_dirs {
            if !check_path_exists(&mut self.reporter, &self.layout.root, dir) {
                missing += 1;
            }
        }
        info!(
            "event=component_dirs module=verify status=ok total={} missing={}",
            self.layout.component_dirs.len(),
            missing
        );
    }

    /// Verifies the manifest and every handler it references.
    ///
    /// # Contract
    /// - Missing manifest fails immediately, before any parse attempt.
    /// - An unreadable or unparseable manifest fails immediately; no handler
    ///   is checked.
    /// - Every handler is checked in collection order; a failing handler
    ///   marks the verdict failed but never stops the sweep.
    ///
    /// Returns `true` only when every step succeeded.
    pub fn verify_manifest(&mut self) -> bool {
        self.reporter.report(ReportEvent::Section {
            title: "Verifying Manifest".to_string(),
        });
        info!(
            "event=verify_manifest module=verify status=start manifest={}",
            self.layout.manifest_path
        );

        if !check_path_exists(&mut self.reporter, &self.layout.root, &self.layout.manifest_path) {
            warn!("event=verify_manifest module=verify status=fail reason=manifest_missing");
            return false;
        }

        let text = match fs::read_to_string(self.layout.root.join(&self.layout.manifest_path)) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    "event=verify_manifest module=verify status=fail reason=manifest_unreadable error={err}"
                );
                self.reporter.report(ReportEvent::Unreadable {
                    path: self.layout.manifest_path.clone(),
                    message: err.to_string(),
                });
                return false;
            }
        };

        let manifest = match BundleManifest::parse(&text) {
            Ok(manifest) => manifest,
            Err(err) => {
                warn!(
                    "event=verify_manifest module=verify status=fail reason=invalid_manifest error={err}"
                );
                self.reporter.report(ReportEvent::InvalidManifest {
                    path: self.layout.manifest_path.clone(),
                    message: err.to_string(),
                });
                return false;
            }
        };

        let handlers = manifest.handler_paths();
        let mut scanned = 0usize;
        let mut all_valid = true;
        for handler in &handlers {
            if !check_path_exists(&mut self.reporter, &self.layout.root, handler) {
                all_valid = false;
                continue;
            }
            if handler.ends_with(&self.layout.script_suffix) {
                scanned += 1;
                if !check_file_balance(&mut self.reporter, &self.layout.root, handler) {
                    all_valid = false;
                }
            }
        }

        info!(
            "event=verify_manifest module=verify status={} handlers={} scanned={}",
            if all_valid { "ok" } else { "fail" },
            handlers.len(),
            scanned
        );
        all_valid
    }
}
