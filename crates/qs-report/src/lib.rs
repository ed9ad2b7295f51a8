//! qs-report - Report generation for QlikScan.
//!
//! Serializes a finalized repository and its reference graph into the
//! machine-readable JSON reports, the human-readable Markdown report, and
//! per-type schema documentation with field cardinality.

pub mod error;
pub mod graph_json;
pub mod markdown;
pub mod objects;
pub mod schema_docs;

pub use error::{ReportError, ReportResult};
pub use graph_json::write_graph_json;
pub use markdown::write_markdown_report;
pub use objects::write_object_report;
pub use schema_docs::{gather_schemas, write_schema_docs, TypeSchema};
