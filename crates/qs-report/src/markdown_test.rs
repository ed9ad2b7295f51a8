use super::*;
use qs_core::{DocNode, Entity};

fn entity(id: &str, deps: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        type_name: "Dimension".to_string(),
        origin: format!("Dimensions/{id}/properties.yaml"),
        fields: vec!["qInfo".to_string(), "Properties".to_string()],
        depends_on: deps.iter().map(|d| d.to_string()).collect(),
        expression: None,
        sheet_objects: Vec::new(),
        raw: DocNode::empty_mapping(),
    }
}

#[test]
fn report_lists_objects_and_graph_summary() {
    let mut repo = Repository::new();
    repo.insert(entity("dim-1", &["var-1"]));
    let graph = ReferenceGraph::build(&repo);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dependency_report.md");
    write_markdown_report(&repo, &graph, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# YAML Dependency & Schema Report"));
    assert!(text.contains("## Objects (1)"));
    assert!(text.contains("### `dim-1`"));
    assert!(text.contains("- **Type**: Dimension"));
    assert!(text.contains("- **Depends on**: var-1"));
    assert!(text.contains("- **Total nodes**: 2"));
    assert!(text.contains("- **Total edges**: 1"));
}

#[test]
fn entity_without_dependencies_reports_none() {
    let mut repo = Repository::new();
    repo.insert(entity("dim-solo", &[]));
    let graph = ReferenceGraph::build(&repo);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dependency_report.md");
    write_markdown_report(&repo, &graph, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("- **Depends on**: *(none)*"));
}
