//! Muster - pre-flight readiness checks for AI development environments.
//!
//! Muster runs a fixed sequence of independent probes against the local
//! environment - interpreter version, API credential, required packages,
//! live API connectivity, secret-leak hygiene, and git cleanliness - and
//! renders a pass/fail/warning report with a final ready/not-ready verdict.
//!
//! # Modules
//!
//! - [`audit`] - Audit session, check results, and report rendering
//! - [`checks`] - The individual readiness checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Bounded external command execution
//! - [`ui`] - Terminal styling and theme
//!
//! # Example
//!
//! ```
//! use muster::audit::CheckResult;
//!
//! let result = CheckResult::pass("API credential", "key format appears valid");
//! assert!(result.outcome.is_pass());
//! ```

pub mod audit;
pub mod checks;
pub mod cli;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{MusterError, Result};
