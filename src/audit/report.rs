//! Report rendering.
//!
//! Check lines are printed as results are recorded; the summary block is
//! rendered once after all checks complete. Output is human-readable text
//! on stdout only.

use std::time::Duration;

use crate::ui::MusterTheme;

use super::result::{CheckResult, Outcome};
use super::session::AuditSession;

/// Renders the audit report to stdout.
#[derive(Debug)]
pub struct Reporter {
    theme: MusterTheme,
}

impl Reporter {
    /// Create a reporter with the given theme.
    pub fn new(theme: MusterTheme) -> Self {
        Self { theme }
    }

    /// Print the report header with the session start time.
    pub fn header(&self, session: &AuditSession) {
        println!(
            "{}",
            self.theme.format_header("Muster - readiness audit")
        );
        println!(
            "{}",
            self.theme.dim.apply_to(format!(
                "started {}",
                session.start_time().format("%Y-%m-%d %H:%M:%S")
            ))
        );
        println!();
    }

    /// Print one check result line, with its detail indented beneath.
    pub fn result(&self, result: &CheckResult) {
        let line = match result.outcome {
            Outcome::Pass => self.theme.format_pass(&result.name),
            Outcome::Fail => self.theme.format_fail(&result.name),
            Outcome::Warn => self.theme.format_warn(&result.name),
        };
        println!("{}", line);
        if let Some(detail) = &result.detail {
            println!("    {}", self.theme.dim.apply_to(detail));
        }
    }

    /// Print the summary block and the final ready/not-ready verdict.
    pub fn summary(&self, session: &AuditSession) {
        println!();
        println!("{}", self.theme.border.apply_to("─".repeat(44)));
        println!("{}", self.theme.highlight.apply_to("Summary"));
        println!(
            "  {} {}",
            self.theme.key.apply_to("Passed:      "),
            session.checks_passed()
        );
        println!(
            "  {} {}",
            self.theme.key.apply_to("Failed:      "),
            session.checks_failed()
        );
        println!(
            "  {} {}",
            self.theme.key.apply_to("Warnings:    "),
            session.warnings()
        );
        println!(
            "  {} {:.1}%",
            self.theme.key.apply_to("Success rate:"),
            session.success_rate()
        );
        println!(
            "  {} {}",
            self.theme.key.apply_to("Duration:    "),
            self.theme.duration.apply_to(format_duration(session.elapsed()))
        );
        println!();

        if session.is_ready() {
            println!(
                "{}",
                self.theme
                    .pass
                    .apply_to("✓ READY - all checks passed, proceed with confidence")
            );
        } else {
            println!(
                "{}",
                self.theme
                    .fail
                    .apply_to("✗ NOT READY - resolve failed checks before proceeding")
            );
        }
    }
}

/// Format a duration as seconds with two decimals (e.g., "1.24s").
pub fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_renders_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1240)), "1.24s");
        assert_eq!(format_duration(Duration::from_secs(0)), "0.00s");
    }

    #[test]
    fn reporter_renders_without_panic() {
        let reporter = Reporter::new(MusterTheme::plain());
        let mut session = AuditSession::new();
        session.record(CheckResult::pass("a", "ok"));
        session.record(CheckResult::fail("b", "bad"));
        session.record(CheckResult::warn("c", "advisory"));

        reporter.header(&session);
        for result in session.results() {
            reporter.result(result);
        }
        reporter.summary(&session);
    }
}
