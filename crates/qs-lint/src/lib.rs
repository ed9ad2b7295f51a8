//! qs-lint - Best-practices checks for QlikScan.
//!
//! Two families of checks: repository checks scan classified entities
//! (master measures, variables) for expression-level issues, and script
//! checks scan raw QVS load-script text line by line. Each check carries a
//! numeric weight; checks run in descending weight order and a failing check
//! never aborts the rest.

pub mod checks;
pub mod engine;
pub mod error;
pub mod warning;

pub use engine::{repo_checks, run_repo_checks, run_script_checks, script_checks};
pub use error::{LintError, LintResult};
pub use warning::{RepoWarning, ScriptWarning};
