//! `qs lint` command — lint a standalone QVS load script.

use anyhow::{Context, Result};
use qs_lint::run_script_checks;
use std::path::Path;

use crate::cli::{GlobalArgs, LintArgs};
use crate::commands::analyze::ScriptLintDoc;

/// Execute the lint command
pub fn execute(args: &LintArgs, _global: &GlobalArgs) -> Result<()> {
    let script_path = Path::new(&args.script);
    let script = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read '{}'", script_path.display()))?;

    let warnings = run_script_checks(&script);
    if warnings.is_empty() {
        println!("No script-lint warnings found.");
        return Ok(());
    }

    for warning in &warnings {
        let first_line = warning.statement.lines().next().unwrap_or("");
        println!("Line {:>4}: {}", warning.line, warning.issue);
        println!("  -> {first_line}");
    }

    let out_dir = Path::new(&args.out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;
    let doc = ScriptLintDoc {
        script_warnings: warnings,
    };
    let out_path = out_dir.join("script_lint.yaml");
    std::fs::write(&out_path, serde_yaml::to_string(&doc)?)?;
    println!("script_lint.yaml written to {}", out_dir.display());
    Ok(())
}
