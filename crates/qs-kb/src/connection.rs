//! Catalog database connection wrapper.
//!
//! [`KbDb`] owns a DuckDB [`Connection`] and provides helpers for opening and
//! migrating the catalog database.

use crate::error::{KbError, KbResult};
use crate::migration::run_migrations;
use duckdb::Connection;
use std::path::Path;

/// File name of the catalog database inside a unit's output directory.
pub const DB_FILENAME: &str = "catalog.duckdb";

/// Wrapper around a DuckDB connection to a unit's `catalog.duckdb`.
///
/// Single-threaded — units are processed sequentially, and each unit owns its
/// own catalog instance, so no locking is needed.
pub struct KbDb {
    conn: Connection,
}

impl KbDb {
    /// Open (or create) the catalog database under `out_dir` and run pending
    /// migrations. The directory is created if missing.
    pub fn open(out_dir: &Path) -> KbResult<Self> {
        std::fs::create_dir_all(out_dir).map_err(|e| {
            KbError::ConnectionError(format!("{e}: {}", out_dir.display()))
        })?;
        let path = out_dir.join(DB_FILENAME);
        let conn = Connection::open(&path)
            .map_err(|e| KbError::ConnectionError(format!("{e}: {}", path.display())))?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Create an in-memory catalog with all migrations applied.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> KbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| KbError::ConnectionError(e.to_string()))?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
