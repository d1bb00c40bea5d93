//! Check result types.
//!
//! Every readiness check produces one or more [`CheckResult`] values.
//! Failures are values, not errors: a check that blows up internally
//! records a `Fail` carrying the error message instead of propagating.

/// Outcome of a single readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The check passed.
    Pass,
    /// The check failed; the environment is not ready.
    Fail,
    /// Advisory observation; never affects the exit code.
    Warn,
}

impl Outcome {
    /// Whether this outcome is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Whether this outcome is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail)
    }

    /// Whether this outcome is advisory only.
    pub fn is_warn(&self) -> bool {
        matches!(self, Outcome::Warn)
    }
}

/// The recorded result of one readiness check.
///
/// Immutable once created; results are appended to the session in
/// execution order, which is also the order they appear in the report.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Check name shown in the report (e.g., "Python version").
    pub name: String,
    /// Pass, fail, or advisory warning.
    pub outcome: Outcome,
    /// Human-readable explanation shown beneath the check line.
    pub detail: Option<String>,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Pass,
            detail: Some(detail.into()),
        }
    }

    /// Create a failing result.
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Fail,
            detail: Some(detail.into()),
        }
    }

    /// Create an advisory warning.
    pub fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Warn,
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_constructor_sets_outcome_and_detail() {
        let result = CheckResult::pass("Python version", "Python 3.11.4");
        assert!(result.outcome.is_pass());
        assert_eq!(result.name, "Python version");
        assert_eq!(result.detail.as_deref(), Some("Python 3.11.4"));
    }

    #[test]
    fn fail_constructor_sets_outcome() {
        let result = CheckResult::fail("API credential", "key appears too short");
        assert!(result.outcome.is_fail());
        assert!(!result.outcome.is_pass());
    }

    #[test]
    fn warn_constructor_sets_outcome() {
        let result = CheckResult::warn("Git status", "uncommitted changes detected");
        assert!(result.outcome.is_warn());
        assert!(!result.outcome.is_fail());
    }

    #[test]
    fn outcome_predicates_are_exclusive() {
        for outcome in [Outcome::Pass, Outcome::Fail, Outcome::Warn] {
            let set = [outcome.is_pass(), outcome.is_fail(), outcome.is_warn()];
            assert_eq!(set.iter().filter(|b| **b).count(), 1);
        }
    }
}
