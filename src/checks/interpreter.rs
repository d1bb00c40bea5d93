//! Python interpreter version check.
//!
//! Resolves `python3` (falling back to `python`) by iterating PATH entries
//! directly, runs `--version`, and compares the parsed version against the
//! minimum. Old interpreters print the version banner to stderr, so both
//! streams are consulted.

use std::path::PathBuf;

use regex::Regex;

use crate::audit::CheckResult;
use crate::shell::{self, COMMAND_TIMEOUT};

/// Check name shown in the report.
pub const NAME: &str = "Python version";

/// Minimum supported interpreter version (major, minor).
pub const MIN_VERSION: (u64, u64) = (3, 8);

/// Interpreter binary names to try, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

/// Run the interpreter version check.
pub fn check() -> CheckResult {
    let Some(python) = resolve_interpreter() else {
        return CheckResult::fail(NAME, "no Python interpreter found on PATH");
    };

    let program = python.to_string_lossy();
    match shell::run_command(&program, &["--version"], None, COMMAND_TIMEOUT) {
        Ok(output) => {
            let raw = if output.stdout.trim().is_empty() {
                output.stderr
            } else {
                output.stdout
            };
            classify(raw.trim())
        }
        Err(e) => CheckResult::fail(NAME, format!("failed to run {}: {}", program, e)),
    }
}

/// Resolve the first Python interpreter on PATH.
pub fn resolve_interpreter() -> Option<PathBuf> {
    let path_entries = shell::parse_system_path();
    CANDIDATES
        .iter()
        .find_map(|name| shell::resolve_tool_path(name, &path_entries))
}

/// Classify a `--version` banner against the minimum version.
fn classify(raw: &str) -> CheckResult {
    match parse_version(raw) {
        Some((major, minor, _)) if (major, minor) >= MIN_VERSION => CheckResult::pass(NAME, raw),
        Some(_) => CheckResult::fail(
            NAME,
            format!(
                "{} (minimum required: {}.{})",
                raw, MIN_VERSION.0, MIN_VERSION.1
            ),
        ),
        None => CheckResult::fail(NAME, format!("could not parse version from '{}'", raw)),
    }
}

/// Extract `MAJOR.MINOR[.PATCH]` from a version banner.
fn parse_version(raw: &str) -> Option<(u64, u64, u64)> {
    let re = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok()?;
    let caps = re.captures(raw)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some((major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version_banner() {
        assert_eq!(parse_version("Python 3.11.4"), Some((3, 11, 4)));
    }

    #[test]
    fn parses_version_without_patch() {
        assert_eq!(parse_version("Python 3.8"), Some((3, 8, 0)));
    }

    #[test]
    fn rejects_banner_without_version() {
        assert_eq!(parse_version("no digits here"), None);
    }

    #[test]
    fn classify_passes_at_minimum() {
        let result = classify("Python 3.8.0");
        assert!(result.outcome.is_pass());
        assert_eq!(result.detail.as_deref(), Some("Python 3.8.0"));
    }

    #[test]
    fn classify_passes_above_minimum() {
        assert!(classify("Python 3.12.1").outcome.is_pass());
    }

    #[test]
    fn classify_fails_below_minimum() {
        let result = classify("Python 3.7.9");
        assert!(result.outcome.is_fail());
        let detail = result.detail.unwrap();
        assert!(detail.contains("3.7.9"));
        assert!(detail.contains("minimum required: 3.8"));
    }

    #[test]
    fn classify_fails_on_python_two() {
        assert!(classify("Python 2.7.18").outcome.is_fail());
    }

    #[test]
    fn classify_fails_on_garbage() {
        let result = classify("flibber");
        assert!(result.outcome.is_fail());
        assert!(result.detail.unwrap().contains("could not parse"));
    }

    #[test]
    fn minor_comparison_is_numeric_not_lexical() {
        // 3.10 >= 3.8 even though "10" < "8" lexically
        assert!(classify("Python 3.10.0").outcome.is_pass());
    }
}
