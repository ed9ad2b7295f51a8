//! Error types for the knowledge base.

use thiserror::Error;

/// Knowledge base errors.
#[derive(Error, Debug)]
pub enum KbError {
    /// Failed to open or create the catalog database (K001).
    #[error("[K001] Knowledge base connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (K002).
    #[error("[K002] Knowledge base migration failed: {0}")]
    MigrationError(String),

    /// SQL execution error inside the catalog (K003).
    #[error("[K003] Knowledge base query failed: {0}")]
    QueryError(String),

    /// Embedding provider failure (K004).
    #[error("[K004] Embedding failed: {0}")]
    Embedding(String),

    /// DuckDB driver error with preserved source chain (K005).
    #[error("[K005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`KbError`].
pub type KbResult<T> = Result<T, KbError>;

impl From<duckdb::Error> for KbError {
    fn from(err: duckdb::Error) -> Self {
        KbError::DuckDb(err)
    }
}
