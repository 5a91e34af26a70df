//! Pre-deployment bundle verification entry point.
//!
//! # Responsibility
//! - Run the fixed verification sequence over the current working directory.
//! - Map the verdict onto the process exit code (0 pass, 1 fail).

use bundlecheck_core::{
    core_version, default_log_level, init_logging, BundleLayout, BundleVerifier, ConsoleReporter,
};
use log::info;
use std::process::ExitCode;

/// Environment variable overriding the diagnostic log level.
const LOG_LEVEL_ENV: &str = "BUNDLECHECK_LOG";

fn main() -> ExitCode {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level) {
        // Diagnostics are ambient; a broken logging setup must not block
        // verification.
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    println!("🚀 Starting Build Verification...");
    println!();

    let mut verifier = BundleVerifier::new(BundleLayout::default(), ConsoleReporter::new());
    verifier.check_component_dirs();
    let passed = verifier.verify_manifest();

    if passed {
        println!();
        println!("✅ BUILD VERIFICATION PASSED!");
        println!("The extension structure is valid and ready for deployment.");
        ExitCode::SUCCESS
    } else {
        println!();
        println!("❌ BUILD VERIFICATION FAILED.");
        println!("Please fix the missing files or syntax errors before deploying.");
        ExitCode::from(1)
    }
}
