//! Core verification logic for bundlecheck.
//! This crate is the single source of truth for bundle validation rules.

pub mod check;
pub mod logging;
pub mod model;
pub mod report;
pub mod verify;

pub use check::balance::{check_file_balance, scan_brackets, BalanceViolation};
pub use check::exists::check_path_exists;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::manifest::{BundleManifest, HandlerSection};
pub use report::{ConsoleReporter, ReportEvent, Reporter};
pub use verify::{BundleLayout, BundleVerifier, COMPONENT_DIRS, MANIFEST_FILE, SCRIPT_SUFFIX};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
