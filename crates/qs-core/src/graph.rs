//! Reference-graph building.
//!
//! Two deterministic passes over a repository: nodes first, then edges.
//! Dangling dependency ids never fail the build; they synthesize placeholder
//! nodes instead. Cycles are allowed — this is a pure reference graph, not a
//! build-order DAG.

use crate::entity::Repository;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// Placeholder type name for nodes synthesized from dangling references.
const UNKNOWN_TYPE: &str = "Unknown";

/// A node of the reference graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefNode {
    pub id: String,
    pub type_name: String,
    /// Empty for synthesized placeholder nodes.
    pub origin: String,
}

/// A directed graph of entity references.
#[derive(Debug, Default)]
pub struct ReferenceGraph {
    graph: DiGraph<RefNode, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl ReferenceGraph {
    /// Build the graph from a finalized repository.
    ///
    /// One node per entity, then one edge per distinct dependency id (empty
    /// ids and self-loops excluded). Unresolvable targets get a placeholder
    /// node typed [`UNKNOWN_TYPE`] with an empty origin.
    pub fn build(repo: &Repository) -> Self {
        let mut graph = Self::default();

        for entity in repo.iter() {
            graph.ensure_node(&entity.id, &entity.type_name, &entity.origin);
        }

        for entity in repo.iter() {
            let mut seen = HashSet::new();
            for dep in &entity.depends_on {
                if dep.is_empty() || dep == &entity.id || !seen.insert(dep.as_str()) {
                    continue;
                }
                if !repo.contains(dep) {
                    log::debug!(
                        "Dependency '{dep}' of '{}' is unresolved, adding placeholder",
                        entity.id
                    );
                    graph.ensure_node(dep, UNKNOWN_TYPE, "");
                }
                graph.add_edge(&entity.id, dep);
            }
        }

        graph
    }

    /// Insert a node for `id` unless one already exists.
    fn ensure_node(&mut self, id: &str, type_name: &str, origin: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(RefNode {
            id: id.to_string(),
            type_name: type_name.to_string(),
            origin: origin.to_string(),
        });
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    /// Add the edge `from -> to`, collapsing duplicates.
    fn add_edge(&mut self, from: &str, to: &str) {
        let (Some(&a), Some(&b)) = (self.node_map.get(from), self.node_map.get(to)) else {
            return;
        };
        self.graph.update_edge(a, b, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&RefNode> {
        self.node_map.get(id).map(|&idx| &self.graph[idx])
    }

    /// Iterate nodes in insertion order (entities first, placeholders after).
    pub fn nodes(&self) -> impl Iterator<Item = &RefNode> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Iterate edges as `(source id, target id)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
            )
        })
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
