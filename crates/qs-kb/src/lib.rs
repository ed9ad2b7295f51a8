//! Knowledge base for QlikScan.
//!
//! Provides a DuckDB-backed persistent catalog of structural type signatures.
//! The catalog resolves a field-name set to a canonical type name via exact
//! matching, optional embedding-based fuzzy matching, or by minting a new
//! `UnknownType_<N>` entry. It also records inter-type dependency edges as a
//! stored, currently unconsumed capability.

pub mod catalog;
pub mod connection;
pub mod ddl;
pub mod embedding;
pub mod error;
pub mod migration;

pub use catalog::{KnowledgeBase, TypeEntry, FUZZY_THRESHOLD};
pub use connection::KbDb;
pub use embedding::{cosine_similarity, EmbeddingProvider};
pub use error::{KbError, KbResult};
