//! Error types for Muster operations.
//!
//! This module defines [`MusterError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never propagate errors upward: a check that fails internally
//!   records a `Fail` result carrying the error message
//! - `MusterError` covers the infrastructure seams (subprocess execution,
//!   HTTP, IO) where distinct handling matters
//! - Use `anyhow::Error` (via `MusterError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Muster operations.
#[derive(Debug, Error)]
pub enum MusterError {
    /// External command binary was not found on PATH.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// External command exceeded its time budget and was killed.
    #[error("Command '{program}' timed out after {seconds}s")]
    CommandTimeout { program: String, seconds: u64 },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Muster operations.
pub type Result<T> = std::result::Result<T, MusterError>;
