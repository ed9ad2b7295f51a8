use super::*;
use qs_core::{DocNode, Entity};

fn entity(id: &str, type_name: &str, fields: &[&str]) -> Entity {
    Entity {
        id: id.to_string(),
        type_name: type_name.to_string(),
        origin: format!("{id}.yaml"),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        depends_on: Vec::new(),
        expression: None,
        sheet_objects: Vec::new(),
        raw: DocNode::empty_mapping(),
    }
}

#[test]
fn mandatory_is_intersection_and_optional_the_rest() {
    let mut repo = Repository::new();
    repo.insert(entity("a", "UnknownType_1", &["qInfo", "Properties", "Extra"]));
    repo.insert(entity("b", "UnknownType_1", &["qInfo", "Properties"]));

    let schemas = gather_schemas(&repo);
    assert_eq!(schemas.len(), 1);
    let schema = &schemas[0];
    assert_eq!(schema.type_name, "UnknownType_1");
    assert_eq!(schema.mandatory, vec!["Properties", "qInfo"]);
    assert_eq!(schema.optional, vec!["Extra"]);
    assert_eq!(schema.fields, vec!["Extra", "Properties", "qInfo"]);
}

#[test]
fn single_entity_makes_all_fields_mandatory() {
    let mut repo = Repository::new();
    repo.insert(entity("a", "Variable", &["Name", "Definition"]));

    let schemas = gather_schemas(&repo);
    assert_eq!(schemas[0].mandatory, vec!["Definition", "Name"]);
    assert!(schemas[0].optional.is_empty());
}

#[test]
fn one_schema_per_type_in_name_order() {
    let mut repo = Repository::new();
    repo.insert(entity("a", "Variable", &["Name"]));
    repo.insert(entity("b", "Dimension", &["qInfo"]));

    let names: Vec<String> = gather_schemas(&repo)
        .into_iter()
        .map(|s| s.type_name)
        .collect();
    assert_eq!(names, vec!["Dimension", "Variable"]);
}

#[test]
fn filenames_replace_non_alphanumerics() {
    let mut repo = Repository::new();
    repo.insert(entity("a", "Generic:Connections", &["Server"]));
    let schemas = gather_schemas(&repo);

    let dir = tempfile::tempdir().unwrap();
    write_schema_docs(&schemas, dir.path()).unwrap();

    let json_path = dir.path().join("schemas/Generic_Connections.json");
    let md_path = dir.path().join("schemas/Generic_Connections.md");
    assert!(json_path.exists());
    assert!(md_path.exists());

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(doc["type_name"], "Generic:Connections");
    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("# Schema: Generic:Connections"));
    assert!(md.contains("- `Server`"));
}
