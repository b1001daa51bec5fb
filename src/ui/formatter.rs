//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use std::path::{Path, PathBuf};

use crate::boundary::ReleaseWarning;
use crate::domain::PublishStep;
use crate::git::StageSet;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a non-fatal release warning.
///
/// Missing optional files are expected in many projects, so they are shown
/// as plain status lines rather than warnings.
pub fn display_release_warning(warning: &ReleaseWarning) {
    match warning {
        ReleaseWarning::MissingOptionalFile { .. } => display_status(&warning.to_string()),
        _ => eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning),
    }
}

/// Message printed after a target file was rewritten
pub fn format_file_updated(path: &Path, version: &str) -> String {
    format!("Version in {} updated to {}.", path.display(), version)
}

/// Message printed in a dry run instead of [format_file_updated]
pub fn format_file_would_update(path: &Path, version: &str, replacements: usize) -> String {
    format!(
        "Would update version in {} to {} ({} declaration(s) matched).",
        path.display(),
        version,
        replacements
    )
}

/// Message printed after the whole release went through
pub fn format_release_success(version: &str) -> String {
    format!("Successfully committed and tagged version {}.", version)
}

/// Describe the state left behind by an interrupted release.
///
/// Nothing is rolled back, so the operator needs to know which files were
/// rewritten and which git steps already ran.
pub fn format_partial_state(
    modified: &[PathBuf],
    completed: &[PublishStep],
    failed: PublishStep,
) -> Vec<String> {
    let mut lines: Vec<String> = format_modified_files(modified).into_iter().collect();

    if completed.is_empty() {
        lines.push("No git step completed".to_string());
    } else {
        let steps: Vec<&str> = completed.iter().map(PublishStep::name).collect();
        lines.push(format!("Completed git steps: {}", steps.join(", ")));
    }

    let skipped: Vec<&str> = PublishStep::SEQUENCE
        .iter()
        .skip_while(|step| **step != failed)
        .skip(1)
        .map(PublishStep::name)
        .collect();
    if !skipped.is_empty() {
        lines.push(format!("Not attempted: {}", skipped.join(", ")));
    }

    lines
}

/// List the files left rewritten, `None` when there are none
pub fn format_modified_files(modified: &[PathBuf]) -> Option<String> {
    if modified.is_empty() {
        return None;
    }
    let files: Vec<String> = modified.iter().map(|p| p.display().to_string()).collect();
    Some(format!("Modified files (not rolled back): {}", files.join(", ")))
}

/// Print the partial state of an interrupted release
pub fn display_partial_state(modified: &[PathBuf], completed: &[PublishStep], failed: PublishStep) {
    for line in format_partial_state(modified, completed, failed) {
        display_status(&line);
    }
}

/// Show the git commands a dry run would have executed
pub fn display_dry_run_plan(
    stage: Option<&StageSet>,
    commit_message: &str,
    tag: &str,
    remote: Option<&str>,
) {
    display_status("Dry run, no git command executed. Planned steps:");
    match stage {
        Some(StageSet::All) => println!("  git add ."),
        Some(StageSet::Paths(paths)) => {
            let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            println!("  git add -- {}", paths.join(" "));
        }
        None => println!("  (nothing to stage)"),
    }
    println!("  git commit -m \"{}\"", commit_message);
    println!("  git tag -- {}", tag);
    let push = match remote {
        Some(remote) => format!("git push {}", remote),
        None => "git push".to_string(),
    };
    println!("  {}", push);
    println!("  {} --tags", push);
}
