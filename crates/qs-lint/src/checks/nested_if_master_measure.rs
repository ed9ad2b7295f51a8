//! Flags master measures whose expressions nest IF() calls.
//!
//! Deeply nested conditionals in a measure are hard to maintain and usually
//! belong in the load script. Any depth beyond a single IF is reported.

use super::pattern;
use crate::error::LintResult;
use crate::warning::RepoWarning;
use qs_core::{DocNode, Repository};

pub const WEIGHT: u32 = 10;

pub fn run(repo: &Repository) -> LintResult<Vec<RepoWarning>> {
    let if_call = pattern("nested_if_master_measure", r"(?i)IF\s*\(")?;
    let mut warnings = Vec::new();

    for entity in repo.iter() {
        if entity.type_name != "MasterMeasure" {
            continue;
        }
        for expression in candidate_expressions(entity) {
            let depth = if_call.find_iter(&expression).count();
            if depth > 1 {
                warnings.push(RepoWarning {
                    file: entity.origin.clone(),
                    type_name: entity.type_name.clone(),
                    issue: format!("Nested IF depth={depth} in master measure"),
                    expression,
                });
            }
        }
    }

    Ok(warnings)
}

/// The expression captured at classification time plus any top-level string
/// value that mentions IF, for measures whose definition lives in an
/// unexpected key.
fn candidate_expressions(entity: &qs_core::Entity) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(expr) = &entity.expression {
        out.push(expr.clone());
    }
    if let DocNode::Mapping(map) = &entity.raw {
        for value in map.values() {
            if let Some(text) = value.as_str() {
                if text.to_uppercase().contains("IF") && !out.iter().any(|e| e == text) {
                    out.push(text.to_string());
                }
            }
        }
    }
    out
}
