//! Per-type schema documentation with field cardinality.
//!
//! A field is mandatory for a type when every entity of that type carries
//! it, optional when at least one does but not all.

use crate::error::ReportResult;
use qs_core::Repository;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// The observed schema of one resolved type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeSchema {
    pub type_name: String,
    /// Union of all observed field lists, sorted.
    pub fields: Vec<String>,
    /// Intersection of all observed field lists, sorted.
    pub mandatory: Vec<String>,
    /// Fields present in some entities of the type but not all, sorted.
    pub optional: Vec<String>,
}

/// Derive a schema per type name from the repository's entities.
pub fn gather_schemas(repo: &Repository) -> Vec<TypeSchema> {
    let mut by_type: BTreeMap<&str, Vec<&[String]>> = BTreeMap::new();
    for entity in repo.iter() {
        by_type
            .entry(&entity.type_name)
            .or_default()
            .push(&entity.fields);
    }

    by_type
        .into_iter()
        .map(|(type_name, field_lists)| {
            let all: BTreeSet<&String> = field_lists.iter().flat_map(|f| f.iter()).collect();
            let mut mandatory: BTreeSet<&String> = field_lists[0].iter().collect();
            for fields in &field_lists[1..] {
                let set: BTreeSet<&String> = fields.iter().collect();
                mandatory.retain(|f| set.contains(*f));
            }
            let optional: Vec<String> = all
                .iter()
                .filter(|f| !mandatory.contains(*f))
                .map(|f| f.to_string())
                .collect();
            TypeSchema {
                type_name: type_name.to_string(),
                fields: all.iter().map(|f| f.to_string()).collect(),
                mandatory: mandatory.iter().map(|f| f.to_string()).collect(),
                optional,
            }
        })
        .collect()
}

/// Write `<out_dir>/schemas/<TypeName>.json` and `.md` for each schema.
/// Non-alphanumeric characters in the type name map to `_` in the filename.
pub fn write_schema_docs(schemas: &[TypeSchema], out_dir: &Path) -> ReportResult<()> {
    let schemas_dir = out_dir.join("schemas");
    fs::create_dir_all(&schemas_dir)?;

    for schema in schemas {
        let safe_name: String = schema
            .type_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        let json = serde_json::to_string_pretty(schema)?;
        fs::write(schemas_dir.join(format!("{safe_name}.json")), json)?;
        fs::write(
            schemas_dir.join(format!("{safe_name}.md")),
            render_markdown(schema),
        )?;
    }
    log::debug!("Wrote schema docs for {} types", schemas.len());
    Ok(())
}

fn render_markdown(schema: &TypeSchema) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Schema: {}", schema.type_name);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Mandatory Fields (appear in every object of this type)");
    let _ = writeln!(md);
    write_field_list(&mut md, &schema.mandatory);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Optional Fields (appear in some objects, but not all)");
    let _ = writeln!(md);
    write_field_list(&mut md, &schema.optional);
    let _ = writeln!(md);
    let _ = writeln!(md, "**Full Field List:**");
    let _ = writeln!(md);
    for field in &schema.fields {
        let _ = writeln!(md, "- `{field}`");
    }
    md
}

fn write_field_list(md: &mut String, fields: &[String]) {
    if fields.is_empty() {
        let _ = writeln!(md, "_None_");
        return;
    }
    for field in fields {
        let _ = writeln!(md, "- `{field}`");
    }
}

#[cfg(test)]
#[path = "schema_docs_test.rs"]
mod tests;
