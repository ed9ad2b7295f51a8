//! Document ingestion: classify the root, resolve types, insert entities.

use crate::classify::{classify, ClassifyContext};
use crate::entity::{Entity, EntityKind, Repository};
use crate::error::CoreResult;
use crate::node::DocNode;

/// Resolution of a provisional type label to a canonical type name.
///
/// Implemented by the knowledge base; kept as a trait so the core pipeline
/// stays decoupled from the catalog's storage backend.
pub trait TypeResolver {
    /// Resolve a field-name signature to a stable type name, minting a new
    /// name when nothing matches.
    fn resolve(&mut self, fields: &[String]) -> CoreResult<String>;
}

/// Classify one document and insert the resulting entities into `repo`.
///
/// A document whose top level is a sequence classifies each mapping element
/// as its own root. Canonical types bypass the resolver; everything else is
/// resolved against the catalog. Descriptors without a usable id are dropped
/// at insertion, and an existing id is never overwritten.
pub fn ingest_document(
    doc: &DocNode,
    ctx: &ClassifyContext,
    repo: &mut Repository,
    resolver: &mut dyn TypeResolver,
) -> CoreResult<()> {
    match doc {
        DocNode::Mapping(_) => ingest_root(doc, ctx, repo, resolver),
        DocNode::Sequence(items) => {
            for item in items {
                if item.is_mapping() {
                    ingest_root(item, ctx, repo, resolver)?;
                }
            }
            Ok(())
        }
        DocNode::Scalar(_) => {
            log::warn!(
                "Top-level node in {} is neither a mapping nor a sequence, skipping",
                ctx.origin()
            );
            Ok(())
        }
    }
}

fn ingest_root(
    root: &DocNode,
    ctx: &ClassifyContext,
    repo: &mut Repository,
    resolver: &mut dyn TypeResolver,
) -> CoreResult<()> {
    for desc in classify(root, ctx, true) {
        let resolved = if EntityKind::is_canonical(&desc.type_name) {
            desc.type_name.clone()
        } else {
            resolver.resolve(&desc.fields)?
        };
        match Entity::from_descriptor(desc, resolved) {
            Some(entity) => {
                repo.insert(entity);
            }
            None => {
                log::debug!("Descriptor from {} has no usable id, dropped", ctx.origin());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
