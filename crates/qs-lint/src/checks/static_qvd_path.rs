//! Flags fully static `lib://...qvd` paths in FROM clauses.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 11;

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let re = pattern(
        "static_qvd_path",
        r"(?i)FROM\s+(?:'|\[)(lib://.*?\.qvd)(?:'|\])",
    )?;
    let mut warnings = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        if let Some(caps) = re.captures(line) {
            warnings.push(ScriptWarning {
                line: idx + 1,
                issue: format!("Static QVD path used: {}", &caps[1]),
                statement: line.trim_end().to_string(),
            });
        }
    }
    Ok(warnings)
}
