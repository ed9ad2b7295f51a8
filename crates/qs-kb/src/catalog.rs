//! The persistent type catalog.
//!
//! Resolution order for a field-name signature: exact set match, then fuzzy
//! embedding match (only when a provider is available), then minting a new
//! `UnknownType_<N>` entry. Canonical entity types never reach this code —
//! the classifier assigns them directly and the ingestion path skips the
//! catalog for them.

use crate::connection::KbDb;
use crate::embedding::{cosine_similarity, EmbeddingProvider};
use crate::error::{KbError, KbResult};
use qs_core::{CoreError, CoreResult, TypeResolver};
use std::collections::HashSet;
use std::path::Path;

/// Minimum cosine similarity for a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.9;

/// Whether a similarity score is good enough to reuse an existing type.
pub fn meets_threshold(similarity: f64) -> bool {
    similarity >= FUZZY_THRESHOLD
}

/// A catalog entry: canonical type name plus its normalized field set.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub type_id: i64,
    pub type_name: String,
    pub fields: Vec<String>,
}

/// The knowledge base: catalog storage plus the optional embedding
/// capability.
pub struct KnowledgeBase {
    db: KbDb,
    embedder: Option<Box<dyn EmbeddingProvider>>,
}

impl KnowledgeBase {
    /// Open the catalog under `out_dir`, optionally with an embedding
    /// provider. Without one the catalog runs in degraded mode: exact
    /// matching and minting only.
    pub fn open(out_dir: &Path, embedder: Option<Box<dyn EmbeddingProvider>>) -> KbResult<Self> {
        let db = KbDb::open(out_dir)?;
        if embedder.is_none() {
            log::warn!(
                "No embedding provider available; fuzzy schema matching disabled, \
                 only exact matching will be used"
            );
        }
        Ok(Self { db, embedder })
    }

    /// In-memory catalog for tests.
    pub fn open_memory(embedder: Option<Box<dyn EmbeddingProvider>>) -> KbResult<Self> {
        Ok(Self {
            db: KbDb::open_memory()?,
            embedder,
        })
    }

    /// Whether fuzzy matching is available.
    pub fn fuzzy_enabled(&self) -> bool {
        self.embedder.is_some()
    }

    /// All catalog entries.
    pub fn list_types(&self) -> KbResult<Vec<TypeEntry>> {
        let mut stmt = self
            .db
            .conn()
            .prepare("SELECT type_id, type_name, fields_json FROM qs_kb.object_types ORDER BY type_id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (type_id, type_name, fields_json) = row?;
            let fields: Vec<String> = serde_json::from_str(&fields_json).map_err(|e| {
                KbError::QueryError(format!("malformed fields_json for '{type_name}': {e}"))
            })?;
            entries.push(TypeEntry {
                type_id,
                type_name,
                fields,
            });
        }
        Ok(entries)
    }

    /// Look up one entry by canonical name.
    pub fn get_type_by_name(&self, type_name: &str) -> KbResult<Option<TypeEntry>> {
        Ok(self
            .list_types()?
            .into_iter()
            .find(|t| t.type_name == type_name))
    }

    /// Insert a new type entry with a normalized (lowercased, sorted) field
    /// set. Computes an embedding when a provider is available. Inserting an
    /// existing name is a no-op.
    pub fn add_type(&self, type_name: &str, fields: &[String]) -> KbResult<()> {
        if self.get_type_by_name(type_name)?.is_some() {
            log::debug!("Type '{type_name}' already exists, skipping insert");
            return Ok(());
        }

        let normalized = normalize_fields(fields);
        let fields_json = serde_json::to_string(&normalized)
            .map_err(|e| KbError::QueryError(format!("failed to encode fields: {e}")))?;

        let emb_json = match &self.embedder {
            Some(provider) => match provider.encode(&normalized.join(" ")) {
                Ok(vector) => serde_json::to_string(&vector).ok(),
                Err(e) => {
                    log::warn!("Failed to compute embedding for '{type_name}': {e}");
                    None
                }
            },
            None => None,
        };

        self.db.conn().execute(
            "INSERT INTO qs_kb.object_types (type_name, fields_json, emb_json) VALUES (?, ?, ?)",
            duckdb::params![type_name, fields_json, emb_json],
        )?;
        log::info!("Added new type '{type_name}' with fields {normalized:?}");
        Ok(())
    }

    /// Record that `type_from` depends on `type_to` via the given field
    /// paths. Existing edges are updated in place.
    ///
    /// Stored but currently unconsumed: no caller reads these edges back yet.
    pub fn add_dependency(&self, type_from: i64, type_to: i64, fields: &[String]) -> KbResult<()> {
        let fields_json = serde_json::to_string(fields)
            .map_err(|e| KbError::QueryError(format!("failed to encode fields: {e}")))?;

        let existing: Option<i64> = self
            .db
            .conn()
            .query_row(
                "SELECT dep_id FROM qs_kb.type_dependencies WHERE type_id_from = ? AND type_id_to = ?",
                duckdb::params![type_from, type_to],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                duckdb::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        match existing {
            Some(dep_id) => {
                self.db.conn().execute(
                    "UPDATE qs_kb.type_dependencies SET fields_json = ?, created_at = now() WHERE dep_id = ?",
                    duckdb::params![fields_json, dep_id],
                )?;
                log::debug!("Updated dependency {type_from} -> {type_to} via {fields:?}");
            }
            None => {
                self.db.conn().execute(
                    "INSERT INTO qs_kb.type_dependencies (type_id_from, type_id_to, fields_json) VALUES (?, ?, ?)",
                    duckdb::params![type_from, type_to, fields_json],
                )?;
                log::debug!("Added dependency {type_from} -> {type_to} via {fields:?}");
            }
        }
        Ok(())
    }

    /// Fuzzy-match a normalized field set against stored embeddings.
    ///
    /// Returns the `type_id` of the best entry with similarity at or above
    /// [`FUZZY_THRESHOLD`]; ties are broken by the first-encountered maximum.
    /// Per-entry failures (malformed stored vectors) skip that entry only.
    pub fn find_candidate_type(&self, normalized: &[String]) -> KbResult<Option<i64>> {
        let Some(provider) = &self.embedder else {
            log::debug!("Fuzzy matching unavailable, skipping");
            return Ok(None);
        };

        let mut sorted = normalized.to_vec();
        sorted.sort();
        let query = match provider.encode(&sorted.join(" ")) {
            Ok(vector) => vector,
            Err(e) => {
                log::warn!("Error encoding fields for fuzzy match: {e}");
                return Ok(None);
            }
        };

        let mut stmt = self.db.conn().prepare(
            "SELECT type_id, emb_json FROM qs_kb.object_types WHERE emb_json IS NOT NULL ORDER BY type_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut best_sim = 0.0f64;
        let mut best_type: Option<i64> = None;
        for row in rows {
            let (type_id, emb_json) = row?;
            let stored: Vec<f32> = match serde_json::from_str(&emb_json) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("Malformed embedding for type_id {type_id}, skipping: {e}");
                    continue;
                }
            };
            let Some(sim) = cosine_similarity(&query, &stored) else {
                log::warn!("Incomparable embedding for type_id {type_id}, skipping");
                continue;
            };
            log::debug!("Similarity(new -> type_id {type_id}) = {sim:.4}");
            if sim > best_sim {
                best_sim = sim;
                best_type = Some(type_id);
            }
        }

        match best_type {
            Some(type_id) if meets_threshold(best_sim) => {
                log::info!("Fuzzy match: fields {normalized:?} -> type_id {type_id} (sim={best_sim:.3})");
                Ok(Some(type_id))
            }
            _ => {
                log::debug!("No fuzzy match (best sim {best_sim:.3} < {FUZZY_THRESHOLD})");
                Ok(None)
            }
        }
    }

    /// Resolve a field signature to a type name: exact match, fuzzy match,
    /// or a freshly minted `UnknownType_<N>`.
    pub fn resolve(&self, fields: &[String]) -> KbResult<String> {
        let normalized = normalize_fields(fields);
        let wanted: HashSet<&str> = normalized.iter().map(String::as_str).collect();

        let entries = self.list_types()?;
        for entry in &entries {
            let have: HashSet<&str> = entry.fields.iter().map(String::as_str).collect();
            if have == wanted {
                return Ok(entry.type_name.clone());
            }
        }

        if let Some(candidate_id) = self.find_candidate_type(&normalized)? {
            if let Some(entry) = entries.iter().find(|t| t.type_id == candidate_id) {
                return Ok(entry.type_name.clone());
            }
        }

        let suffix = next_unknown_suffix(&entries);
        let type_name = format!("UnknownType_{suffix}");
        self.add_type(&type_name, &normalized)?;
        Ok(type_name)
    }
}

impl TypeResolver for KnowledgeBase {
    fn resolve(&mut self, fields: &[String]) -> CoreResult<String> {
        KnowledgeBase::resolve(self, fields)
            .map_err(|e| CoreError::TypeResolution { message: e.to_string() })
    }
}

/// Lowercase and sort a field list.
fn normalize_fields(fields: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    normalized.sort();
    normalized
}

/// Next numeric suffix for a minted type name: largest existing numeric
/// suffix across all entries, plus one.
fn next_unknown_suffix(entries: &[TypeEntry]) -> u64 {
    entries
        .iter()
        .filter_map(|entry| {
            entry
                .type_name
                .rsplit_once('_')
                .and_then(|(_, tail)| tail.parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0)
        + 1
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
