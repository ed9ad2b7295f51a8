//! Individual best-practices checks.
//!
//! Each module exposes a `WEIGHT` constant and a `run` function; the engine
//! collects them in descending weight order.

pub mod hardcoded_date;
pub mod missing_semicolon;
pub mod nested_if_master_measure;
pub mod select_star;
pub mod static_qvd_path;
pub mod subs_qvd_usage;
pub mod uppercase_keywords;
pub mod variable_placeholder;

use crate::error::{LintError, LintResult};
use regex::Regex;

/// Compile a pattern, converting failures into a check error.
pub(crate) fn pattern(check: &str, re: &str) -> LintResult<Regex> {
    Regex::new(re).map_err(|e| LintError::CheckFailed {
        check: check.to_string(),
        message: e.to_string(),
    })
}
