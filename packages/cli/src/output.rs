//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;
use image_mirror::RunSummary;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{}\n", message.bold());
}

/// Print the source and destination roots.
pub fn print_paths(source: &Path, dest: &Path) {
    println!("Source:      {}", source.display().to_string().cyan());
    println!("Destination: {}", dest.display().to_string().cyan());
    println!();
}

/// Print the per-outcome counts of a finished run.
pub fn print_summary(summary: &RunSummary) {
    print_count("resized", summary.transformed, true);
    print_count("copied", summary.copied.saturating_sub(summary.degraded), true);
    if summary.degraded > 0 {
        print_count("copied (resize failed)", summary.degraded, false);
    }
    if summary.skipped > 0 {
        print_count("skipped", summary.skipped, false);
    }
    if summary.failed > 0 {
        print_count("failed", summary.failed, false);
    }
    println!();
}

fn print_count(label: &str, count: u64, is_success: bool) {
    if is_success {
        println!("{} {:<24} {}", "✓".green(), label, count);
    } else {
        println!("{} {:<24} {}", "•".yellow(), label, count);
    }
}

/// Point at the log file when this run wrote to it.
pub fn print_log_notice(log_path: &Path, entries: u64) {
    println!(
        "{} {} {} written to {}",
        "Note:".yellow().bold(),
        entries,
        if entries == 1 { "entry" } else { "entries" },
        log_path.display()
    );
}

/// Print success message.
pub fn print_success(total: u64) {
    println!(
        "{} Mirrored {} file{}",
        "Done.".green().bold(),
        total,
        if total == 1 { "" } else { "s" }
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
