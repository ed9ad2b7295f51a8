//! The check registry and execution loop.
//!
//! Checks are registered with a numeric weight and run in descending weight
//! order. A check that fails is logged and skipped; the remaining checks
//! still run.

use crate::checks;
use crate::error::LintResult;
use crate::warning::{RepoWarning, ScriptWarning};
use qs_core::Repository;

/// A registered repository check.
pub struct RepoCheck {
    pub name: &'static str,
    pub weight: u32,
    pub run: fn(&Repository) -> LintResult<Vec<RepoWarning>>,
}

/// A registered script check.
pub struct ScriptCheck {
    pub name: &'static str,
    pub weight: u32,
    pub run: fn(&str) -> LintResult<Vec<ScriptWarning>>,
}

/// All repository checks, heaviest first.
pub fn repo_checks() -> Vec<RepoCheck> {
    let mut list = vec![
        RepoCheck {
            name: "nested_if_master_measure",
            weight: checks::nested_if_master_measure::WEIGHT,
            run: checks::nested_if_master_measure::run,
        },
        RepoCheck {
            name: "variable_placeholder",
            weight: checks::variable_placeholder::WEIGHT,
            run: checks::variable_placeholder::run,
        },
    ];
    list.sort_by(|a, b| b.weight.cmp(&a.weight));
    list
}

/// All script checks, heaviest first.
pub fn script_checks() -> Vec<ScriptCheck> {
    let mut list = vec![
        ScriptCheck {
            name: "static_qvd_path",
            weight: checks::static_qvd_path::WEIGHT,
            run: checks::static_qvd_path::run,
        },
        ScriptCheck {
            name: "select_star",
            weight: checks::select_star::WEIGHT,
            run: checks::select_star::run,
        },
        ScriptCheck {
            name: "subs_qvd_usage",
            weight: checks::subs_qvd_usage::WEIGHT,
            run: checks::subs_qvd_usage::run,
        },
        ScriptCheck {
            name: "uppercase_keywords",
            weight: checks::uppercase_keywords::WEIGHT,
            run: checks::uppercase_keywords::run,
        },
        ScriptCheck {
            name: "missing_semicolon",
            weight: checks::missing_semicolon::WEIGHT,
            run: checks::missing_semicolon::run,
        },
        ScriptCheck {
            name: "hardcoded_date",
            weight: checks::hardcoded_date::WEIGHT,
            run: checks::hardcoded_date::run,
        },
    ];
    list.sort_by(|a, b| b.weight.cmp(&a.weight));
    list
}

/// Run every repository check against `repo`, collecting all warnings.
pub fn run_repo_checks(repo: &Repository) -> Vec<RepoWarning> {
    let mut warnings = Vec::new();
    for check in repo_checks() {
        match (check.run)(repo) {
            Ok(found) => warnings.extend(found),
            Err(e) => log::warn!("Repository check '{}' failed: {e}", check.name),
        }
    }
    warnings
}

/// Run every script check against `script`, collecting all warnings.
pub fn run_script_checks(script: &str) -> Vec<ScriptWarning> {
    let mut warnings = Vec::new();
    for check in script_checks() {
        match (check.run)(script) {
            Ok(found) => warnings.extend(found),
            Err(e) => log::warn!("Script check '{}' failed: {e}", check.name),
        }
    }
    warnings
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
