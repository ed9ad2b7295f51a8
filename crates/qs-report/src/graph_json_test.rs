use super::*;
use qs_core::{DocNode, Entity, Repository};

fn entity(id: &str, deps: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        type_name: "Variable".to_string(),
        origin: format!("{id}.yaml"),
        fields: Vec::new(),
        depends_on: deps.iter().map(|d| d.to_string()).collect(),
        expression: None,
        sheet_objects: Vec::new(),
        raw: DocNode::empty_mapping(),
    }
}

#[test]
fn serializes_nodes_and_edges() {
    let mut repo = Repository::new();
    repo.insert(entity("a", &["b", "ghost"]));
    repo.insert(entity("b", &[]));
    let graph = ReferenceGraph::build(&repo);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dependency_graph.json");
    write_graph_json(&graph, &path).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let nodes = doc["nodes"].as_array().unwrap();
    let edges = doc["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 2);

    let ghost = nodes.iter().find(|n| n["id"] == "ghost").unwrap();
    assert_eq!(ghost["type_name"], "Unknown");
    assert_eq!(ghost["file_path"], "");
    assert!(edges
        .iter()
        .any(|e| e["from"] == "a" && e["to"] == "ghost"));
}
