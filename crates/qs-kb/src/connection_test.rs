use super::*;

#[test]
fn test_open_memory_applies_migrations() {
    let db = KbDb::open_memory().unwrap();
    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM qs_kb.object_types", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_open_creates_directory_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("out");
    let _db = KbDb::open(&out_dir).unwrap();
    assert!(out_dir.join(DB_FILENAME).exists());
}

#[test]
fn test_reopen_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = KbDb::open(dir.path()).unwrap();
        db.conn()
            .execute(
                "INSERT INTO qs_kb.object_types (type_name, fields_json) VALUES (?, ?)",
                duckdb::params!["UnknownType_1", "[\"a\"]"],
            )
            .unwrap();
    }
    let db = KbDb::open(dir.path()).unwrap();
    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM qs_kb.object_types", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 1);
}
