//! `qs analyze` command — discover app folders, classify every YAML
//! document, and write per-app plus aggregated outputs.

use anyhow::{bail, Context, Result};
use qs_core::{ingest_document, ClassifyContext, ReferenceGraph, Repository};
use qs_kb::KnowledgeBase;
use qs_lint::{run_repo_checks, run_script_checks, RepoWarning, ScriptWarning};
use qs_report::{
    gather_schemas, write_graph_json, write_markdown_report, write_object_report,
    write_schema_docs,
};
use serde::Serialize;
use std::path::Path;

use crate::cli::{AnalyzeArgs, GlobalArgs};
use crate::{discovery, loader};

#[derive(Serialize)]
struct RepoLintDoc {
    best_practices_warnings: Vec<RepoWarning>,
}

#[derive(Serialize)]
pub(crate) struct ScriptLintDoc {
    pub(crate) script_warnings: Vec<ScriptWarning>,
}

/// Execute the analyze command
pub fn execute(args: &AnalyzeArgs, _global: &GlobalArgs) -> Result<()> {
    let root_dir = Path::new(&args.root_dir);
    if !root_dir.is_dir() {
        bail!("Root directory '{}' does not exist", args.root_dir);
    }
    let out_dir = Path::new(&args.out_dir);

    log::info!("Starting multi-app analysis of '{}'", args.root_dir);
    let app_folders =
        discovery::discover_app_folders(root_dir).context("App discovery failed")?;
    if app_folders.is_empty() {
        log::error!("No subfolders with App.yaml found under root, nothing to do");
        return Ok(());
    }
    log::info!("Found {} app(s)", app_folders.len());

    // Per-app catalogs stay isolated; the aggregate gets a store of its own.
    let mut aggregate_repo = Repository::new();
    let _aggregate_kb = KnowledgeBase::open(&out_dir.join("_aggregate_kb"), None)
        .context("Failed to open aggregate catalog")?;

    for app_path in &app_folders {
        let app_name = app_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app");
        let app_out = out_dir.join(app_name);
        log::info!("=== Processing app: {app_name} ===");

        let repo = analyze_app(app_path, &app_out, args.md_report)
            .with_context(|| format!("Analysis of app '{app_name}' failed"))?;
        aggregate_repo.absorb(repo);
    }

    write_aggregate(&aggregate_repo, &out_dir.join("_aggregate"), args.md_report)?;
    log::info!("Multi-app analysis complete");
    Ok(())
}

/// Analyze one app folder and write its outputs, returning the repository
/// for aggregation.
fn analyze_app(app_path: &Path, app_out: &Path, md_report: bool) -> Result<Repository> {
    std::fs::create_dir_all(app_out)
        .with_context(|| format!("Failed to create '{}'", app_out.display()))?;

    // Degraded mode: exact matching and minting only, no fuzzy matching.
    let mut kb = KnowledgeBase::open(app_out, None).context("Failed to open type catalog")?;
    let mut repo = Repository::new();

    let yaml_files = discovery::find_yaml_files(app_path).context("YAML scan failed")?;
    log::info!("  Found {} YAML file(s)", yaml_files.len());

    for path in &yaml_files {
        let Some(doc) = loader::load_yaml_file(path) else {
            log::warn!("  Skipping invalid or empty YAML: {}", path.display());
            continue;
        };
        let ctx = ClassifyContext::new(path.to_string_lossy())
            .with_sibling_widgets(loader::load_sibling_widgets(path));
        ingest_document(&doc, &ctx, &mut repo, &mut kb)
            .with_context(|| format!("Failed to process '{}'", path.display()))?;
    }
    log::info!("  Total objects discovered: {}", repo.len());

    let graph = ReferenceGraph::build(&repo);
    log::info!(
        "  Dependency graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    write_object_report(&repo, app_out)?;
    write_graph_json(&graph, &app_out.join("dependency_graph.json"))?;
    if md_report {
        write_markdown_report(&repo, &graph, &app_out.join("dependency_report.md"))?;
    }
    write_schema_docs(&gather_schemas(&repo), app_out)?;

    let bp_warnings = run_repo_checks(&repo);
    if bp_warnings.is_empty() {
        log::info!("  No best-practice warnings");
    } else {
        log::info!(
            "  Found {} best-practice warning(s), see best_practices.yaml",
            bp_warnings.len()
        );
        let doc = RepoLintDoc {
            best_practices_warnings: bp_warnings,
        };
        std::fs::write(
            app_out.join("best_practices.yaml"),
            serde_yaml::to_string(&doc)?,
        )?;
    }

    let script_path = app_path.join("Script.qvs");
    if script_path.is_file() {
        let script = std::fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read '{}'", script_path.display()))?;
        let warnings = run_script_checks(&script);
        log::info!("  Found {} script lint warning(s)", warnings.len());
        if !warnings.is_empty() {
            let doc = ScriptLintDoc {
                script_warnings: warnings,
            };
            std::fs::write(
                app_out.join("script_lint.yaml"),
                serde_yaml::to_string(&doc)?,
            )?;
        }
    } else {
        log::debug!("  No Script.qvs in this app");
    }

    Ok(repo)
}

/// Write the cross-app summary: merged object listing, aggregate graph, and
/// optionally the Markdown report.
fn write_aggregate(repo: &Repository, agg_out: &Path, md_report: bool) -> Result<()> {
    std::fs::create_dir_all(agg_out)
        .with_context(|| format!("Failed to create '{}'", agg_out.display()))?;

    let graph = ReferenceGraph::build(repo);
    log::info!(
        "Aggregate graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    write_object_report(repo, agg_out)?;
    write_graph_json(&graph, &agg_out.join("aggregate_dependency_graph.json"))?;
    if md_report {
        write_markdown_report(repo, &graph, &agg_out.join("dependency_report.md"))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
