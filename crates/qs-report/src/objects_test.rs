use super::*;
use qs_core::{DocNode, Entity};

fn entity(id: &str, type_name: &str, fields: &[&str], deps: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        type_name: type_name.to_string(),
        origin: format!("{id}.yaml"),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        depends_on: deps.iter().map(|d| d.to_string()).collect(),
        expression: None,
        sheet_objects: Vec::new(),
        raw: DocNode::empty_mapping(),
    }
}

#[test]
fn writes_one_row_per_entity_in_id_order() {
    let mut repo = Repository::new();
    repo.insert(entity("zeta", "Variable", &["Name"], &[]));
    repo.insert(entity("alpha", "Dimension", &["qInfo", "Properties"], &["zeta"]));

    let dir = tempfile::tempdir().unwrap();
    write_object_report(&repo, dir.path()).unwrap();

    let text = std::fs::read_to_string(dir.path().join("all_objects.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["obj_id"], "alpha");
    assert_eq!(rows[0]["type_name"], "Dimension");
    assert_eq!(rows[0]["file_path"], "alpha.yaml");
    assert_eq!(rows[0]["depends_on"][0], "zeta");
    assert_eq!(rows[1]["obj_id"], "zeta");
}

#[test]
fn empty_repository_produces_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    write_object_report(&Repository::new(), dir.path()).unwrap();

    let text = std::fs::read_to_string(dir.path().join("all_objects.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 0);
}
