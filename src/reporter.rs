//! Report formatting and printing utilities.
//!
//! This module is separate from the compiler so lingo can be used as a
//! library without printing side effects.

use colored::Colorize;

use crate::compiler::BuildReport;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print warning diagnostics collected during a build.
///
/// Covers unreadable source files, a missing default locale, and missing
/// key paths. All of these are advisory; none fail the build.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print the summary for a completed build.
pub fn print_build_summary(report: &BuildReport, verbose: bool) {
    if verbose {
        for artifact in &report.artifacts {
            println!("  {} {}", "-->".blue(), artifact.display());
        }
    }

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Compiled {} locale {}",
            report.locales.len(),
            if report.locales.len() == 1 {
                "bundle"
            } else {
                "bundles"
            }
        )
        .green()
    );
}

/// Print the summary for an audit-only run.
pub fn print_check_summary(report: &BuildReport) {
    if report.warnings.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} locale {} - no issues found",
                report.locales.len(),
                if report.locales.len() == 1 {
                    "file"
                } else {
                    "files"
                }
            )
            .green()
        );
    } else {
        println!(
            "\n{} {} across {} locale {}",
            report.warnings.len(),
            if report.warnings.len() == 1 {
                "warning"
            } else {
                "warnings"
            },
            report.locales.len(),
            if report.locales.len() == 1 {
                "file"
            } else {
                "files"
            }
        );
    }
}

/// Print the cache-hit message for a skipped rebuild.
pub fn print_unchanged(verbose: bool) {
    if verbose {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "Translations unchanged - rebuild skipped".green()
        );
    }
}
