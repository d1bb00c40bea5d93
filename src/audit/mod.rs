//! Audit orchestration.
//!
//! The [`Auditor`] runs the fixed check sequence in order, records each
//! result on the [`AuditSession`], and streams report lines as it goes.
//! Checks are independent: no check's outcome feeds into another, and no
//! check may abort the run.

mod report;
mod result;
mod session;

pub use report::{format_duration, Reporter};
pub use result::{CheckResult, Outcome};
pub use session::AuditSession;

use std::path::PathBuf;

use crate::checks;

/// Executes the full readiness check sequence for one project root.
#[derive(Debug)]
pub struct Auditor {
    root: PathBuf,
    offline: bool,
}

impl Auditor {
    /// Create an auditor for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            offline: false,
        }
    }

    /// Skip the live API connectivity check (recorded as a warning).
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Run all checks in order and render the report.
    ///
    /// Returns the completed session; the caller derives the process exit
    /// code from it.
    pub fn run(&self, reporter: &Reporter) -> AuditSession {
        let mut session = AuditSession::new();
        reporter.header(&session);

        self.record(&mut session, reporter, checks::interpreter::check());
        self.record(&mut session, reporter, checks::credential::check());
        self.record(&mut session, reporter, checks::packages::check());
        self.record(
            &mut session,
            reporter,
            checks::connectivity::check(self.offline),
        );
        for result in checks::security::scan(&self.root) {
            self.record(&mut session, reporter, result);
        }
        if let Some(result) = checks::security::check_env_file(&self.root) {
            self.record(&mut session, reporter, result);
        }
        self.record(&mut session, reporter, checks::vcs::check(&self.root));

        reporter.summary(&session);
        session
    }

    fn record(&self, session: &mut AuditSession, reporter: &Reporter, result: CheckResult) {
        tracing::debug!(
            name = %result.name,
            outcome = ?result.outcome,
            detail = result.detail.as_deref().unwrap_or(""),
            "check complete"
        );
        reporter.result(&result);
        session.record(result);
    }
}
