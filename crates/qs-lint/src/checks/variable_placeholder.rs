//! Reserved slot for variable hygiene checks.
//!
//! TODO: flag variables whose expression references another variable that is
//! absent from the repository.

use crate::error::LintResult;
use crate::warning::RepoWarning;
use qs_core::Repository;

pub const WEIGHT: u32 = 1;

pub fn run(_repo: &Repository) -> LintResult<Vec<RepoWarning>> {
    Ok(Vec::new())
}
