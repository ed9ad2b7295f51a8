//! Warns when a script line contains `SELECT *`.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 9;

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let re = pattern("select_star", r"(?i)\bSELECT\s+\*")?;
    let mut warnings = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        if re.is_match(line) {
            warnings.push(ScriptWarning {
                line: idx + 1,
                issue: "Avoid using SELECT * (not field-specific).".to_string(),
                statement: line.trim_end().to_string(),
            });
        }
    }
    Ok(warnings)
}
