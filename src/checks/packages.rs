//! Required package check.
//!
//! Probes each required library with `python -c "import <name>"`. The
//! import probe is the only reliable installedness signal: a package can
//! be pip-installed yet broken, and an import catches both cases.

use std::time::Duration;

use crate::audit::CheckResult;
use crate::shell;

use super::interpreter;

/// Check name shown in the report.
pub const NAME: &str = "Required packages";

/// Libraries that must be importable.
pub const REQUIRED_PACKAGES: &[&str] = &[
    "openai",
    "requests",
    "numpy",
    "pandas",
    "matplotlib",
    "jupyter",
    "tiktoken",
];

/// Time budget per import probe. Heavyweight packages (jupyter, matplotlib)
/// can take several seconds to import on a cold cache.
const IMPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the required package check.
pub fn check() -> CheckResult {
    let Some(python) = interpreter::resolve_interpreter() else {
        return CheckResult::fail(NAME, "no Python interpreter found on PATH");
    };
    let program = python.to_string_lossy();

    let mut missing = Vec::new();
    for package in REQUIRED_PACKAGES {
        let import = format!("import {}", package);
        match shell::run_command(&program, &["-c", &import], None, IMPORT_TIMEOUT) {
            Ok(output) if output.success => {}
            // Probe errors (timeout, kill) count as missing rather than
            // aborting the check.
            Ok(_) | Err(_) => missing.push(*package),
        }
    }

    if missing.is_empty() {
        CheckResult::pass(NAME, "all critical packages installed")
    } else {
        CheckResult::fail(NAME, format!("missing packages: {}", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_list_is_fixed_and_nonempty() {
        assert!(REQUIRED_PACKAGES.contains(&"openai"));
        assert!(REQUIRED_PACKAGES.contains(&"tiktoken"));
        assert_eq!(REQUIRED_PACKAGES.len(), 7);
    }

    #[test]
    fn missing_detail_is_comma_joined() {
        let missing = ["openai", "tiktoken"];
        let detail = format!("missing packages: {}", missing.join(", "));
        assert_eq!(detail, "missing packages: openai, tiktoken");
    }

    #[test]
    fn check_never_panics_without_interpreter_or_packages() {
        // Whatever the host has installed, the check must classify, not abort.
        let result = check();
        assert!(result.outcome.is_pass() || result.outcome.is_fail());
        assert!(result.detail.is_some());
    }
}
