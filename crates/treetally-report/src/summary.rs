//! Colored console summary.

use std::fmt::Write;

use colored::Colorize;
use humansize::{BINARY, format_size};

use treetally_core::ProjectTree;

/// Render the scan summary: project name banner, the four totals, then
/// one line per extension kind in first-seen order.
pub fn render_summary(tree: &ProjectTree) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "====== {} ======",
        tree.config.name.to_uppercase().red()
    );
    let _ = writeln!(
        output,
        "Total files: {}",
        tree.totals.total_files.to_string().green()
    );
    let _ = writeln!(
        output,
        "Total lines of code: {}",
        tree.totals.total_lines.to_string().green()
    );
    let _ = writeln!(
        output,
        "Total directories: {}",
        tree.totals.total_directories.to_string().green()
    );
    let _ = writeln!(
        output,
        "Estimated size: {}",
        format_size(tree.totals.total_size, BINARY).green()
    );

    for entry in tree.totals.extensions() {
        let _ = writeln!(
            output,
            "\t{}{}: {}",
            entry.display_name,
            format!(" ({})", entry.extension).blue(),
            entry.count.to_string().green()
        );
    }

    if tree.has_warnings() {
        let _ = writeln!(
            output,
            "{} warning(s) during scan",
            tree.warnings.len().to_string().yellow()
        );
    }

    output
}

/// Print the summary to stdout.
pub fn print_summary(tree: &ProjectTree) {
    print!("{}", render_summary(tree));
}
