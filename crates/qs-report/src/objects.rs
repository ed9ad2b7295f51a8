//! The `all_objects.json` listing.

use crate::error::ReportResult;
use qs_core::Repository;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One row of the object listing.
#[derive(Debug, Serialize)]
struct ObjectRow<'a> {
    obj_id: &'a str,
    type_name: &'a str,
    file_path: &'a str,
    fields: &'a [String],
    depends_on: &'a [String],
}

/// Write `all_objects.json` under `out_dir`, one row per entity in
/// identifier order.
pub fn write_object_report(repo: &Repository, out_dir: &Path) -> ReportResult<()> {
    fs::create_dir_all(out_dir)?;
    let rows: Vec<ObjectRow<'_>> = repo
        .iter()
        .map(|entity| ObjectRow {
            obj_id: &entity.id,
            type_name: &entity.type_name,
            file_path: &entity.origin,
            fields: &entity.fields,
            depends_on: &entity.depends_on,
        })
        .collect();
    let json = serde_json::to_string_pretty(&rows)?;
    fs::write(out_dir.join("all_objects.json"), json)?;
    log::debug!("Wrote object report with {} entries", rows.len());
    Ok(())
}

#[cfg(test)]
#[path = "objects_test.rs"]
mod tests;
