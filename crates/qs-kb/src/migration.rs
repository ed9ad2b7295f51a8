//! Schema migration runner for the catalog database.
//!
//! Tracks applied migration versions in `qs_kb.schema_version` and runs any
//! unapplied migrations on each open.

use crate::ddl::MIGRATIONS;
use crate::error::{KbError, KbResult};
use duckdb::Connection;

/// Ensure the `qs_kb` schema and `schema_version` table exist.
fn ensure_version_table(conn: &Connection) -> KbResult<()> {
    conn.execute_batch(
        "CREATE SCHEMA IF NOT EXISTS qs_kb;
         CREATE TABLE IF NOT EXISTS qs_kb.schema_version (
             version    INTEGER NOT NULL,
             applied_at TIMESTAMP NOT NULL DEFAULT now()
         );",
    )
    .map_err(|e| KbError::MigrationError(format!("failed to create schema_version table: {e}")))?;
    Ok(())
}

/// Return the highest applied migration version, or 0 if none.
fn current_version(conn: &Connection) -> KbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM qs_kb.schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| KbError::MigrationError(format!("failed to read schema version: {e}")))?;
    Ok(version)
}

/// Run all unapplied migrations against `conn`.
pub fn run_migrations(conn: &Connection) -> KbResult<()> {
    ensure_version_table(conn)?;
    let current = current_version(conn)?;

    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        log::debug!("Applying catalog migration v{:03}", migration.version);

        conn.execute_batch(migration.sql).map_err(|e| {
            KbError::MigrationError(format!("migration v{:03} failed: {e}", migration.version))
        })?;

        conn.execute(
            "INSERT INTO qs_kb.schema_version (version) VALUES (?)",
            duckdb::params![migration.version],
        )
        .map_err(|e| {
            KbError::MigrationError(format!(
                "failed to record migration v{:03}: {e}",
                migration.version
            ))
        })?;
    }
    Ok(())
}
