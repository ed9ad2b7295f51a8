use super::*;
use std::collections::HashMap;

/// Provider with a fixed text -> vector table; unknown texts fail.
struct TableProvider {
    vectors: HashMap<String, Vec<f32>>,
}

impl TableProvider {
    fn new(pairs: &[(&str, &[f32])]) -> Self {
        Self {
            vectors: pairs
                .iter()
                .map(|(text, vec)| (text.to_string(), vec.to_vec()))
                .collect(),
        }
    }
}

impl EmbeddingProvider for TableProvider {
    fn encode(&self, text: &str) -> KbResult<Vec<f32>> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| KbError::Embedding(format!("no vector for '{text}'")))
    }
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_mint_new_type() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    let name = kb.resolve(&fields(&["alpha", "beta"])).unwrap();
    assert_eq!(name, "UnknownType_1");

    let entry = kb.get_type_by_name("UnknownType_1").unwrap().unwrap();
    assert_eq!(entry.fields, vec!["alpha", "beta"]);
}

#[test]
fn test_exact_match_is_idempotent() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    let first = kb.resolve(&fields(&["alpha", "beta"])).unwrap();
    // Same signature in different case and order must hit the same entry.
    let second = kb.resolve(&fields(&["Beta", "ALPHA"])).unwrap();
    assert_eq!(first, second);
    assert_eq!(kb.list_types().unwrap().len(), 1);
}

#[test]
fn test_distinct_signatures_mint_increasing_suffixes() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    assert_eq!(kb.resolve(&fields(&["a"])).unwrap(), "UnknownType_1");
    assert_eq!(kb.resolve(&fields(&["b"])).unwrap(), "UnknownType_2");
    assert_eq!(kb.resolve(&fields(&["c"])).unwrap(), "UnknownType_3");
}

#[test]
fn test_suffix_counts_from_largest_existing() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    kb.add_type("UnknownType_7", &fields(&["x"])).unwrap();
    assert_eq!(kb.resolve(&fields(&["y"])).unwrap(), "UnknownType_8");
}

#[test]
fn test_degraded_mode_skips_fuzzy() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    assert!(!kb.fuzzy_enabled());
    assert!(kb.find_candidate_type(&fields(&["a", "b"])).unwrap().is_none());
}

#[test]
fn test_fuzzy_match_reuses_similar_entry() {
    // "colour label" is parallel to "color label"; same direction, so
    // cosine similarity is 1.0.
    let provider = TableProvider::new(&[
        ("color label", &[1.0, 2.0, 0.0]),
        ("colour label", &[2.0, 4.0, 0.0]),
    ]);
    let kb = KnowledgeBase::open_memory(Some(Box::new(provider))).unwrap();

    kb.add_type("UnknownType_1", &fields(&["color", "label"]))
        .unwrap();
    let name = kb.resolve(&fields(&["colour", "label"])).unwrap();
    assert_eq!(name, "UnknownType_1");
    assert_eq!(kb.list_types().unwrap().len(), 1);
}

#[test]
fn test_fuzzy_below_threshold_mints() {
    // Orthogonal vectors: similarity 0, well below the threshold.
    let provider = TableProvider::new(&[
        ("color label", &[1.0, 0.0]),
        ("size weight", &[0.0, 1.0]),
    ]);
    let kb = KnowledgeBase::open_memory(Some(Box::new(provider))).unwrap();

    kb.add_type("UnknownType_1", &fields(&["color", "label"]))
        .unwrap();
    let name = kb.resolve(&fields(&["size", "weight"])).unwrap();
    assert_eq!(name, "UnknownType_2");
}

#[test]
fn test_threshold_boundary() {
    assert!(meets_threshold(0.9));
    assert!(meets_threshold(0.95));
    assert!(!meets_threshold(0.8999));
}

#[test]
fn test_encode_failure_degrades_to_minting() {
    // Provider knows the stored entry's text but not the query's.
    let provider = TableProvider::new(&[("color label", &[1.0, 0.0])]);
    let kb = KnowledgeBase::open_memory(Some(Box::new(provider))).unwrap();

    kb.add_type("UnknownType_1", &fields(&["color", "label"]))
        .unwrap();
    let name = kb.resolve(&fields(&["other", "thing"])).unwrap();
    assert_eq!(name, "UnknownType_2");
}

#[test]
fn test_malformed_stored_embedding_is_skipped() {
    let provider = TableProvider::new(&[("a b", &[1.0, 0.0])]);
    let kb = KnowledgeBase::open_memory(Some(Box::new(provider))).unwrap();

    kb.db
        .conn()
        .execute(
            "INSERT INTO qs_kb.object_types (type_name, fields_json, emb_json) VALUES (?, ?, ?)",
            duckdb::params!["Broken_1", "[\"z\"]", "not-json"],
        )
        .unwrap();

    // Resolution survives the malformed entry and mints a fresh name.
    let name = kb.resolve(&fields(&["a", "b"])).unwrap();
    assert_eq!(name, "UnknownType_2");
}

#[test]
fn test_add_type_is_idempotent_by_name() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    kb.add_type("UnknownType_1", &fields(&["a"])).unwrap();
    kb.add_type("UnknownType_1", &fields(&["b"])).unwrap();
    let entry = kb.get_type_by_name("UnknownType_1").unwrap().unwrap();
    assert_eq!(entry.fields, vec!["a"]);
}

#[test]
fn test_add_dependency_insert_then_update() {
    let kb = KnowledgeBase::open_memory(None).unwrap();
    kb.add_type("UnknownType_1", &fields(&["a"])).unwrap();
    kb.add_type("UnknownType_2", &fields(&["b"])).unwrap();
    let from = kb.get_type_by_name("UnknownType_1").unwrap().unwrap().type_id;
    let to = kb.get_type_by_name("UnknownType_2").unwrap().unwrap().type_id;

    kb.add_dependency(from, to, &fields(&["ref_field"])).unwrap();
    kb.add_dependency(from, to, &fields(&["ref_field", "other"]))
        .unwrap();

    let (count, stored): (i64, String) = kb
        .db
        .conn()
        .query_row(
            "SELECT COUNT(*), MAX(fields_json) FROM qs_kb.type_dependencies WHERE type_id_from = ? AND type_id_to = ?",
            duckdb::params![from, to],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(count, 1);
    assert!(stored.contains("other"));
}
