//! Individual readiness checks.
//!
//! Each check is an independent, side-effect-free probe of local state
//! that classifies into pass/fail/warn. Checks swallow their own internal
//! errors: anything unexpected becomes a `Fail` result carrying the error
//! message, never a panic or a propagated error.

pub mod connectivity;
pub mod credential;
pub mod interpreter;
pub mod packages;
pub mod security;
pub mod vcs;
