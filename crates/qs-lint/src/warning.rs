//! Warning records emitted by the checks.

use serde::Serialize;

/// A warning produced by a repository check.
#[derive(Debug, Clone, Serialize)]
pub struct RepoWarning {
    /// Path of the document the offending entity came from.
    pub file: String,
    /// Type name of the offending entity.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human-readable description of the issue.
    pub issue: String,
    /// The offending expression text.
    pub expression: String,
}

/// A warning produced by a script check.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptWarning {
    /// 1-based line number in the script.
    pub line: usize,
    /// Human-readable description of the issue.
    pub issue: String,
    /// The offending statement (possibly multi-line).
    pub statement: String,
}
