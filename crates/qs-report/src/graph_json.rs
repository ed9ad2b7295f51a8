//! The dependency-graph JSON output.

use crate::error::ReportResult;
use qs_core::ReferenceGraph;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct GraphNode<'a> {
    id: &'a str,
    type_name: &'a str,
    file_path: &'a str,
}

#[derive(Debug, Serialize)]
struct GraphEdge<'a> {
    from: &'a str,
    to: &'a str,
}

#[derive(Debug, Serialize)]
struct GraphDoc<'a> {
    nodes: Vec<GraphNode<'a>>,
    edges: Vec<GraphEdge<'a>>,
}

/// Serialize `graph` as `{"nodes": [...], "edges": [...]}` to `out_path`.
pub fn write_graph_json(graph: &ReferenceGraph, out_path: &Path) -> ReportResult<()> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let doc = GraphDoc {
        nodes: graph
            .nodes()
            .map(|node| GraphNode {
                id: &node.id,
                type_name: &node.type_name,
                file_path: &node.origin,
            })
            .collect(),
        edges: graph
            .edges()
            .map(|(from, to)| GraphEdge { from, to })
            .collect(),
    };
    fs::write(out_path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "graph_json_test.rs"]
mod tests;
