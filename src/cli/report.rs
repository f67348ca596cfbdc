//! Console output for command results.
//!
//! Kept apart from the commands so potscan can be used as a library without
//! printing anything.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Status lines and dry-run documents go to `out`; notes, warnings and the
/// dry-run summary go to `err`.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        let source = match &summary.config_path {
            Some(path) => format!("using config {}", path.display()),
            None => format!("no {} found, using defaults", CONFIG_FILE_NAME),
        };
        let _ = writeln!(err, "{} {}", "note:".bold().cyan(), source);

        for file in &summary.extraction.files {
            let _ = writeln!(
                err,
                "{} scanned {} ({})",
                "note:".bold().cyan(),
                file.path.display(),
                plural(file.match_count, "match", "matches")
            );
        }
    }

    if summary.key_count() == 0 {
        let _ = writeln!(
            err,
            "{} no translation keys found in {}",
            "warning:".bold().yellow(),
            plural(summary.file_count(), "file", "files")
        );
    }

    if let Some(document) = &summary.dry_run_output {
        let _ = write!(out, "{}", document);
        // Summary goes to stderr so stdout stays a clean template
        let _ = writeln!(
            err,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} from {} (dry run, nothing written)",
                plural(summary.key_count(), "translation key", "translation keys"),
                plural(summary.file_count(), "file", "files")
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {}, saved to {}",
            plural(summary.key_count(), "translation key", "translation keys"),
            plural(summary.file_count(), "file", "files"),
            summary.output.display()
        )
        .green()
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}
