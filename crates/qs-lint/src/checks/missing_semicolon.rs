//! Warns on DML statements that never reach a trailing semicolon.
//!
//! A statement starts at a DML keyword and is collected until a line ends
//! with `;` or the next DML keyword begins. Statements cut off by the next
//! DML (or end of script) without a semicolon are flagged.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 5;

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let dml_start = pattern(
        "missing_semicolon",
        r"(?i)^\s*(LOAD|SELECT|INSERT|UPDATE|DELETE)\b",
    )?;
    let lines: Vec<&str> = script.lines().collect();
    let mut warnings = Vec::new();

    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx];
        if !dml_start.is_match(line) {
            idx += 1;
            continue;
        }

        let mut statement = vec![line];
        let mut found_semicolon = line.trim_end().ends_with(';');
        let start_line = idx + 1;
        let mut k = idx + 1;
        while k < lines.len() && !found_semicolon {
            let next = lines[k];
            if dml_start.is_match(next) {
                break;
            }
            statement.push(next);
            if next.trim_end().ends_with(';') {
                found_semicolon = true;
                break;
            }
            k += 1;
        }

        if !found_semicolon {
            warnings.push(ScriptWarning {
                line: start_line,
                issue: "Statement likely missing trailing semicolon".to_string(),
                statement: statement.join("\n"),
            });
        }
        idx = k.max(idx + 1);
    }

    Ok(warnings)
}
