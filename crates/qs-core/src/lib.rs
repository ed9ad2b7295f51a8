//! qs-core - Core library for QlikScan
//!
//! This crate provides the document tree, the classifier chain that turns
//! document roots into typed entity descriptors, the entity repository, the
//! ingestion pipeline, and the reference-graph builder used across all
//! QlikScan components.

pub mod classify;
pub mod entity;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod node;

pub use classify::{classify, ClassifyContext, SiblingWidget};
pub use entity::{Descriptor, Entity, EntityKind, Repository};
pub use error::{CoreError, CoreResult};
pub use graph::{RefNode, ReferenceGraph};
pub use ingest::{ingest_document, TypeResolver};
pub use node::{DocNode, Scalar};
