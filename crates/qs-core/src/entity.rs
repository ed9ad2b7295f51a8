//! Entities, descriptors, and the repository they live in.

use crate::node::DocNode;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// The six well-known entity kinds whose names never originate from the type
/// catalog. The classifier chain assigns them directly and type resolution
/// leaves them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Dimension,
    MasterMeasure,
    MasterObject,
    Variable,
    Sheet,
    Widget,
}

impl EntityKind {
    /// The canonical type name for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Dimension => "Dimension",
            EntityKind::MasterMeasure => "MasterMeasure",
            EntityKind::MasterObject => "MasterObject",
            EntityKind::Variable => "Variable",
            EntityKind::Sheet => "Sheet",
            EntityKind::Widget => "Widget",
        }
    }

    /// Whether `name` is one of the canonical type names.
    pub fn is_canonical(name: &str) -> bool {
        matches!(
            name,
            "Dimension" | "MasterMeasure" | "MasterObject" | "Variable" | "Sheet" | "Widget"
        )
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient candidate produced by a classification rule, before the type
/// catalog has resolved its final type name.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Provisional identifier. Descriptors without one are still produced but
    /// dropped at insertion time.
    pub id: Option<String>,
    /// Provisional type label (canonical name or a fallback label).
    pub type_name: String,
    /// Path of the originating document.
    pub origin: String,
    /// Field names observed at the document root.
    pub fields: Vec<String>,
    /// Explicitly discovered dependency identifiers.
    pub depends_on: Vec<String>,
    /// Expression text, for variables and measures.
    pub expression: Option<String>,
    /// Sheet containment metadata. Never contributes graph edges.
    pub sheet_objects: Vec<String>,
    /// The originating subtree, retained so later consumers can re-inspect
    /// raw content.
    pub raw: DocNode,
}

impl Descriptor {
    /// A descriptor with the given provisional type and origin, everything
    /// else empty. Rules fill in the rest.
    pub fn new(type_name: impl Into<String>, origin: &str, raw: &DocNode) -> Self {
        Self {
            id: None,
            type_name: type_name.into(),
            origin: origin.to_string(),
            fields: Vec::new(),
            depends_on: Vec::new(),
            expression: None,
            sheet_objects: Vec::new(),
            raw: raw.clone(),
        }
    }
}

/// A finalized, identifier-keyed record for one classified object.
///
/// Immutable once inserted into a [`Repository`].
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: String,
    pub type_name: String,
    pub origin: String,
    pub fields: Vec<String>,
    pub depends_on: Vec<String>,
    pub expression: Option<String>,
    pub sheet_objects: Vec<String>,
    pub raw: DocNode,
}

impl Entity {
    /// Finalize a descriptor under a resolved type name. Returns `None` when
    /// the descriptor carries no usable identifier.
    pub fn from_descriptor(desc: Descriptor, resolved_type: String) -> Option<Self> {
        let id = desc.id.filter(|id| !id.is_empty())?;
        Some(Self {
            id,
            type_name: resolved_type,
            origin: desc.origin,
            fields: desc.fields,
            depends_on: desc.depends_on,
            expression: desc.expression,
            sheet_objects: desc.sheet_objects,
            raw: desc.raw,
        })
    }
}

/// Registry of entities keyed by identifier.
///
/// Created empty per processing unit and populated during classification.
/// Insertion is first-writer-wins: a later entity with an already-present
/// identifier is skipped, never overwritten. The aggregate repository reuses
/// the same rule when merging units.
#[derive(Debug, Default)]
pub struct Repository {
    entities: BTreeMap<String, Entity>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity`, returning `false` when it was skipped (empty id or
    /// already present).
    pub fn insert(&mut self, entity: Entity) -> bool {
        if entity.id.is_empty() {
            log::debug!("Skipping entity with empty id from {}", entity.origin);
            return false;
        }
        match self.entities.entry(entity.id.clone()) {
            Entry::Occupied(_) => {
                log::debug!("Entity '{}' already exists, skipping", entity.id);
                false
            }
            Entry::Vacant(slot) => {
                log::debug!("Added entity '{}' as '{}'", entity.id, entity.type_name);
                slot.insert(entity);
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Merge another repository into this one under first-writer-wins.
    ///
    /// Units are merged in processing order, so an identifier seen in an
    /// earlier unit always survives.
    pub fn absorb(&mut self, other: Repository) {
        for (_, entity) in other.entities {
            self.insert(entity);
        }
    }
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod tests;
