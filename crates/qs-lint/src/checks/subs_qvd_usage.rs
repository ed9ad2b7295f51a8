//! Scans SUB definitions for static paths assigned to their parameters.
//!
//! Variables passed into a SUB's path parameters should be dynamic
//! (`lib://` prefixes resolved at run time, `$(...)` expansions); a complete
//! literal `lib://...` path with a file extension is flagged.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 8;

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let sub_def = pattern("subs_qvd_usage", r"(?i)^\s*SUB\s+(\w+)\s*\((.*?)\)")?;
    let end_sub = pattern("subs_qvd_usage", r"(?i)^\s*END SUB")?;
    let static_path = pattern("subs_qvd_usage", r"(?i)^lib://.*\.\w+$")?;

    let lines: Vec<&str> = script.lines().collect();
    let mut warnings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = sub_def.captures(line) else {
            continue;
        };
        let params: Vec<String> = caps[2]
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        // Collect the SUB body up to END SUB.
        let mut body_end = idx + 1;
        while body_end < lines.len() && !end_sub.is_match(lines[body_end]) {
            body_end += 1;
        }

        for (offset, body_line) in lines[idx + 1..body_end].iter().enumerate() {
            for param in &params {
                let assignment = pattern(
                    "subs_qvd_usage",
                    &format!(r"(?i){}\s*=\s*(.+?)(,|\))", regex::escape(param)),
                )?;
                let Some(m) = assignment.captures(body_line) else {
                    continue;
                };
                let resolved = m[1].trim();
                let literal = resolved
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .unwrap_or(resolved)
                    .trim();
                if static_path.is_match(literal) {
                    warnings.push(ScriptWarning {
                        line: idx + 2 + offset,
                        issue: format!(
                            "Static path '{literal}' passed to parameter '{param}'."
                        ),
                        statement: body_line.trim_end().to_string(),
                    });
                }
            }
        }
    }

    Ok(warnings)
}
