//! Secret-leak hygiene checks.
//!
//! The scan walks the project tree (skipping VCS internals) and flags any
//! source file containing the `sk-` key marker without a reference to the
//! credential variable in the same file. The heuristic is deliberately
//! coarse: a file that names the variable is assumed to be reading the key
//! from the environment rather than embedding it.

use std::fs;
use std::path::Path;

use crate::audit::CheckResult;

use super::credential::CREDENTIAL_VAR;

/// Check name shown in the report.
pub const NAME: &str = "Secret scan";

/// Check name for the local env-file advisory.
pub const ENV_FILE_NAME: &str = "Local env file";

/// Substring that marks a suspected hardcoded key.
pub const SECRET_MARKER: &str = "sk-";

/// Source file extension included in the scan.
const SOURCE_EXTENSION: &str = "py";

/// Directories never descended into.
const SKIP_DIRS: &[&str] = &[".git"];

/// Scan the project tree for suspected hardcoded keys.
///
/// Returns one `Fail` per offending file, or a single `Pass` when the
/// tree is clean. Unreadable files and directories are silently skipped;
/// the scan never aborts.
pub fn scan(root: &Path) -> Vec<CheckResult> {
    let mut findings = Vec::new();
    scan_dir(root, &mut findings);

    if findings.is_empty() {
        vec![CheckResult::pass(
            NAME,
            "no obvious hardcoded secrets detected",
        )]
    } else {
        findings
    }
}

/// Advisory check for a local `.env` file in the project root.
///
/// Never passes or fails; emits a warning when the file exists.
pub fn check_env_file(root: &Path) -> Option<CheckResult> {
    root.join(".env").exists().then(|| {
        CheckResult::warn(
            ENV_FILE_NAME,
            ".env file present - ensure it is listed in .gitignore",
        )
    })
}

fn scan_dir(dir: &Path, findings: &mut Vec<CheckResult>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        let path = entry.path();
        // Real directories only: descending into symlinked directories
        // would report the same file under multiple paths, and a symlink
        // cycle would multiply findings until the walk errors out.
        if file_type.is_dir() {
            let skip = path
                .file_name()
                .map(|name| SKIP_DIRS.iter().any(|d| name == *d))
                .unwrap_or(false);
            if !skip {
                scan_dir(&path, findings);
            }
        } else if path.extension().map(|ext| ext == SOURCE_EXTENSION).unwrap_or(false)
            && path.is_file()
        {
            if let Ok(content) = fs::read_to_string(&path) {
                if content.contains(SECRET_MARKER) && !content.contains(CREDENTIAL_VAR) {
                    findings.push(CheckResult::fail(
                        NAME,
                        format!("potential hardcoded key in {}", path.display()),
                    ));
                }
            }
        }
    }
}
