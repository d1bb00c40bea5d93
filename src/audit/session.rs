//! Audit session state.
//!
//! One [`AuditSession`] exists per process invocation. It accumulates
//! check results and pass/fail/warning counters as the audit runs, and
//! is read once at the end to render the summary. No persistence.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use super::result::{CheckResult, Outcome};

/// Accumulated state of one audit run.
#[derive(Debug)]
pub struct AuditSession {
    start_time: DateTime<Local>,
    started: Instant,
    results: Vec<CheckResult>,
    checks_passed: usize,
    checks_failed: usize,
    warnings: usize,
}

impl AuditSession {
    /// Start a new session at the current wall-clock time.
    pub fn new() -> Self {
        Self {
            start_time: Local::now(),
            started: Instant::now(),
            results: Vec::new(),
            checks_passed: 0,
            checks_failed: 0,
            warnings: 0,
        }
    }

    /// Record one check result, updating the matching counter.
    ///
    /// Warnings are counted separately from pass/fail and never affect
    /// the exit code.
    pub fn record(&mut self, result: CheckResult) {
        match result.outcome {
            Outcome::Pass => self.checks_passed += 1,
            Outcome::Fail => self.checks_failed += 1,
            Outcome::Warn => self.warnings += 1,
        }
        self.results.push(result);
    }

    /// Wall-clock time the session started.
    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    /// Elapsed time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// All recorded results, in execution order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of checks that passed.
    pub fn checks_passed(&self) -> usize {
        self.checks_passed
    }

    /// Number of checks that failed.
    pub fn checks_failed(&self) -> usize {
        self.checks_failed
    }

    /// Number of advisory warnings recorded.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Percentage of binary checks that passed (0.0 when none ran).
    pub fn success_rate(&self) -> f64 {
        let total = self.checks_passed + self.checks_failed;
        if total == 0 {
            0.0
        } else {
            self.checks_passed as f64 / total as f64 * 100.0
        }
    }

    /// Whether the environment is ready (no failed checks).
    pub fn is_ready(&self) -> bool {
        self.checks_failed == 0
    }

    /// Process exit code: 0 when ready, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_ready() {
            0
        } else {
            1
        }
    }
}

impl Default for AuditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty_and_ready() {
        let session = AuditSession::new();
        assert!(session.results().is_empty());
        assert_eq!(session.checks_passed(), 0);
        assert_eq!(session.checks_failed(), 0);
        assert_eq!(session.warnings(), 0);
        assert!(session.is_ready());
        assert_eq!(session.exit_code(), 0);
    }

    #[test]
    fn record_increments_matching_counter() {
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("a", "ok"));
        session.record(CheckResult::pass("b", "ok"));
        session.record(CheckResult::fail("c", "bad"));
        session.record(CheckResult::warn("d", "heads up"));

        assert_eq!(session.checks_passed(), 2);
        assert_eq!(session.checks_failed(), 1);
        assert_eq!(session.warnings(), 1);
        assert_eq!(session.results().len(), 4);
    }

    #[test]
    fn results_preserve_insertion_order() {
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("first", "ok"));
        session.record(CheckResult::fail("second", "bad"));

        let names: Vec<&str> = session.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn pass_and_fail_counts_cover_all_binary_checks() {
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("a", "ok"));
        session.record(CheckResult::fail("b", "bad"));
        session.record(CheckResult::warn("c", "advisory"));

        let binary = session
            .results()
            .iter()
            .filter(|r| !r.outcome.is_warn())
            .count();
        assert_eq!(session.checks_passed() + session.checks_failed(), binary);
    }

    #[test]
    fn exit_code_is_one_iff_any_failure() {
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("a", "ok"));
        assert_eq!(session.exit_code(), 0);

        session.record(CheckResult::fail("b", "bad"));
        assert_eq!(session.exit_code(), 1);
        assert!(!session.is_ready());
    }

    #[test]
    fn warnings_never_affect_exit_code() {
        let mut session = AuditSession::new();
        session.record(CheckResult::warn("a", "advisory"));
        session.record(CheckResult::warn("b", "advisory"));
        assert_eq!(session.exit_code(), 0);
        assert!(session.is_ready());
    }

    #[test]
    fn success_rate_is_zero_with_no_binary_checks() {
        let mut session = AuditSession::new();
        assert_eq!(session.success_rate(), 0.0);

        session.record(CheckResult::warn("a", "advisory"));
        assert_eq!(session.success_rate(), 0.0);
    }

    #[test]
    fn success_rate_computed_from_binary_checks_only() {
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("a", "ok"));
        session.record(CheckResult::pass("b", "ok"));
        session.record(CheckResult::fail("c", "bad"));
        session.record(CheckResult::warn("d", "advisory"));

        let rate = session.success_rate();
        assert!((rate - 66.666).abs() < 0.1);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let session = AuditSession::new();
        let first = session.elapsed();
        let second = session.elapsed();
        assert!(second >= first);
    }
}
