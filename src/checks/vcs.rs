//! Git working-tree cleanliness check.
//!
//! Runs `git status --porcelain` in the project root. A dirty tree is an
//! advisory warning, not a failure; a missing git binary or a directory
//! that isn't a repository is a failure.

use std::path::Path;

use crate::audit::CheckResult;
use crate::error::MusterError;
use crate::shell::{self, COMMAND_TIMEOUT};

/// Check name shown in the report.
pub const NAME: &str = "Git status";

/// Run the git cleanliness check for the given project root.
pub fn check(root: &Path) -> CheckResult {
    match shell::run_command(
        "git",
        &["status", "--porcelain"],
        Some(root),
        COMMAND_TIMEOUT,
    ) {
        Ok(output) if output.success => {
            if output.stdout.trim().is_empty() {
                CheckResult::pass(NAME, "working directory clean")
            } else {
                CheckResult::warn(NAME, "uncommitted changes detected")
            }
        }
        Ok(_) => CheckResult::fail(NAME, "not a git repository or git error"),
        Err(MusterError::CommandNotFound { .. }) => CheckResult::fail(NAME, "git not installed"),
        Err(e) => CheckResult::fail(NAME, format!("git status failed: {}", e)),
    }
}
