//! Terminal output for the binary.
//!
//! The `format_*` functions build the plain text lines; the `display_*`
//! functions add styling and print them. Styling is dropped automatically
//! when stdout is not a terminal, so scripts always see plain lines.

use console::style;

use crate::cli::BumpOutcome;
use crate::domain::{Version, VersionBump};

/// Line printed by `get-version`
pub fn format_version_line(version: &Version) -> String {
    format!("VERSION: {}", version)
}

/// Line printed by `bump-version`
pub fn format_bump_line(previous: &Version, current: &Version) -> String {
    format!("Bumped up from {} ---> {}", previous, current)
}

/// Note appended to a bump that was not persisted
pub fn format_dry_run_note(bump: VersionBump) -> String {
    format!("Dry run: {} bump not written", bump)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_version(version: &Version) {
    println!("{}", format_version_line(version));
}

/// Print the bump result, noting when nothing was written.
pub fn display_bump(outcome: &BumpOutcome) {
    println!("{}", format_bump_line(&outcome.previous, &outcome.current));
    if !outcome.written {
        display_status(&format_dry_run_note(outcome.bump));
    }
}
