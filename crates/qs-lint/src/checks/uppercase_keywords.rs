//! Flags load-script keywords that are not written in uppercase.
//!
//! Comment content is ignored: `//` lines are skipped entirely and `/* */`
//! blocks are stripped, including blocks spanning multiple lines.

use super::pattern;
use crate::error::LintResult;
use crate::warning::ScriptWarning;

pub const WEIGHT: u32 = 6;

const KEYWORDS: &[&str] = &["STORE"];

pub fn run(script: &str) -> LintResult<Vec<ScriptWarning>> {
    let mut patterns = Vec::with_capacity(KEYWORDS.len());
    for keyword in KEYWORDS {
        let any_case = pattern("uppercase_keywords", &format!(r"(?i)\b{keyword}\b"))?;
        let exact = pattern("uppercase_keywords", &format!(r"\b{keyword}\b"))?;
        patterns.push((*keyword, any_case, exact));
    }

    let mut warnings = Vec::new();
    let mut in_block_comment = false;

    for (idx, raw_line) in script.lines().enumerate() {
        let line = strip_block_comments(raw_line, &mut in_block_comment);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        for (keyword, any_case, exact) in &patterns {
            if any_case.is_match(&line) && !exact.is_match(&line) {
                warnings.push(ScriptWarning {
                    line: idx + 1,
                    issue: format!("Keyword '{keyword}' should be uppercase."),
                    statement: raw_line.trim_end().to_string(),
                });
                break;
            }
        }
    }

    Ok(warnings)
}

/// Remove `/* */` comment content from `line`, tracking open blocks across
/// lines via `in_block`.
fn strip_block_comments(line: &str, in_block: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        if *in_block {
            match rest.find("*/") {
                Some(pos) => {
                    *in_block = false;
                    rest = &rest[pos + 2..];
                }
                None => return out,
            }
        } else {
            match rest.find("/*") {
                Some(pos) => {
                    out.push_str(&rest[..pos]);
                    *in_block = true;
                    rest = &rest[pos + 2..];
                }
                None => {
                    out.push_str(rest);
                    return out;
                }
            }
        }
    }
}
