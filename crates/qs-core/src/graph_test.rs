use super::*;
use crate::entity::Entity;
use crate::node::DocNode;

fn entity(id: &str, type_name: &str, deps: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        type_name: type_name.to_string(),
        origin: format!("app/{id}.yaml"),
        fields: Vec::new(),
        depends_on: deps.iter().map(|d| d.to_string()).collect(),
        expression: None,
        sheet_objects: Vec::new(),
        raw: DocNode::empty_mapping(),
    }
}

fn repo_of(entities: Vec<Entity>) -> Repository {
    let mut repo = Repository::new();
    for e in entities {
        repo.insert(e);
    }
    repo
}

#[test]
fn test_resolved_edge() {
    let repo = repo_of(vec![
        entity("W1", "Widget", &["M1"]),
        entity("M1", "MasterMeasure", &[]),
    ]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![("W1", "M1")]);
}

#[test]
fn test_dangling_reference_synthesizes_placeholder() {
    let repo = repo_of(vec![entity("W", "Widget", &["M_missing"])]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let placeholder = graph.node("M_missing").unwrap();
    assert_eq!(placeholder.type_name, "Unknown");
    assert_eq!(placeholder.origin, "");
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("W", "M_missing")]);
}

#[test]
fn test_shared_missing_target_yields_one_placeholder() {
    let repo = repo_of(vec![
        entity("A", "Widget", &["M_missing"]),
        entity("B", "Widget", &["M_missing"]),
    ]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_self_loop_excluded() {
    let repo = repo_of(vec![entity("A", "Widget", &["A", "B"])]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("A", "B")]);
}

#[test]
fn test_empty_and_duplicate_deps_collapse() {
    let repo = repo_of(vec![
        entity("A", "Widget", &["", "B", "B"]),
        entity("B", "MasterMeasure", &[]),
    ]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_cycles_are_allowed() {
    let repo = repo_of(vec![
        entity("A", "Widget", &["B"]),
        entity("B", "Widget", &["A"]),
    ]);
    let graph = ReferenceGraph::build(&repo);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_node_attributes() {
    let repo = repo_of(vec![entity("D1", "Dimension", &[])]);
    let graph = ReferenceGraph::build(&repo);
    let node = graph.node("D1").unwrap();
    assert_eq!(node.type_name, "Dimension");
    assert_eq!(node.origin, "app/D1.yaml");
}
