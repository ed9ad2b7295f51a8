//! Warns when a LET statement assigns a hardcoded date literal.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 4;

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let re = pattern(
        "hardcoded_date",
        r"(?i)^\s*LET\s+\w+\s*=\s*'(\d{4}-\d{2}-\d{2})'",
    )?;
    let mut warnings = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        if let Some(caps) = re.captures(line) {
            warnings.push(ScriptWarning {
                line: idx + 1,
                issue: format!("Hardcoded date literal ({}) in LET.", &caps[1]),
                statement: line.trim_end().to_string(),
            });
        }
    }
    Ok(warnings)
}
