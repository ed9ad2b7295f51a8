//! The human-readable Markdown dependency report.

use crate::error::ReportResult;
use chrono::Utc;
use qs_core::{ReferenceGraph, Repository};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render and write the Markdown report to `out_path`: one section per
/// entity plus a graph summary.
pub fn write_markdown_report(
    repo: &Repository,
    graph: &ReferenceGraph,
    out_path: &Path,
) -> ReportResult<()> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, render(repo, graph))?;
    Ok(())
}

fn render(repo: &Repository, graph: &ReferenceGraph) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# YAML Dependency & Schema Report");
    let _ = writeln!(md, "Generated: {} UTC", Utc::now().format("%Y-%m-%dT%H:%M:%S"));
    let _ = writeln!(md);
    let _ = writeln!(md, "## Objects ({})", repo.len());
    let _ = writeln!(md);
    for entity in repo.iter() {
        let _ = writeln!(md, "### `{}`", entity.id);
        let _ = writeln!(md, "- **Type**: {}", entity.type_name);
        let _ = writeln!(md, "- **File**: {}", entity.origin);
        let _ = writeln!(md, "- **Fields**: {}", entity.fields.join(", "));
        if entity.depends_on.is_empty() {
            let _ = writeln!(md, "- **Depends on**: *(none)*");
        } else {
            let _ = writeln!(md, "- **Depends on**: {}", entity.depends_on.join(", "));
        }
        let _ = writeln!(md);
    }
    let _ = writeln!(md, "## Dependency Graph Summary");
    let _ = writeln!(md, "- **Total nodes**: {}", graph.node_count());
    let _ = writeln!(md, "- **Total edges**: {}", graph.edge_count());
    let _ = writeln!(md);
    let _ = writeln!(md, "*(See `dependency_graph.json` for full adjacency list.)*");
    md
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
