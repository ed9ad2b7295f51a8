//! Error types for qs-lint

use thiserror::Error;

/// Lint error type. A failing check is logged and skipped by the engine, so
/// these never abort a run.
#[derive(Error, Debug)]
pub enum LintError {
    /// L001: A check could not complete
    #[error("[L001] Check '{check}' failed: {message}")]
    CheckFailed { check: String, message: String },
}

/// Result type alias for LintError
pub type LintResult<T> = Result<T, LintError>;
