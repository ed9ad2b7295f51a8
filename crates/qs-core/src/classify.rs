//! The classifier chain: ordered rules that turn a document root into zero or
//! more entity descriptors.
//!
//! Rules are evaluated in strict priority order; the first matching rule's
//! extractor runs and no further rule is tried. The fallback rule always
//! matches, so every root-eligible mapping yields at least one descriptor.
//! Only document roots are classified; nested mappings are never fed back in.

use crate::entity::{Descriptor, EntityKind};
use crate::node::DocNode;
use std::path::Path;

/// Vendor prefix recognized on widget type tags.
const VENDOR_PREFIX: &str = "Vizlib";

/// Sentinel ids for objects that carry no explicit identifier of their own.
const UNNAMED_VARIABLE: &str = "<UnnamedVariable>";
const UNNAMED_SHEET: &str = "<UnnamedSheet>";
const UNNAMED_WIDGET: &str = "<UnnamedWidget>";

/// A widget document loaded from a sheet's sibling `Widgets` directory,
/// together with the directory name it was found under (the id of last
/// resort).
#[derive(Debug, Clone)]
pub struct SiblingWidget {
    pub dir_name: String,
    pub doc: DocNode,
}

/// Per-document classification context derived from the origin path.
#[derive(Debug, Clone)]
pub struct ClassifyContext {
    origin: String,
    file_stem: String,
    parent_dir: String,
    sibling_widgets: Vec<SiblingWidget>,
}

impl ClassifyContext {
    /// Derive filename and parent-directory signals from `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        let path = Path::new(&origin);
        let file_stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let parent_dir = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        Self {
            origin,
            file_stem,
            parent_dir,
            sibling_widgets: Vec::new(),
        }
    }

    /// Attach pre-loaded widget documents from the sibling `Widgets`
    /// directory, consumed by the sheet rule.
    pub fn with_sibling_widgets(mut self, widgets: Vec<SiblingWidget>) -> Self {
        self.sibling_widgets = widgets;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn stem_is(&self, name: &str) -> bool {
        self.file_stem.eq_ignore_ascii_case(name)
    }

    fn parent_is(&self, name: &str) -> bool {
        self.parent_dir.eq_ignore_ascii_case(name)
    }
}

/// One rule of the chain: a predicate plus an extractor, returning `None`
/// when the predicate does not match.
trait ClassifyRule: Sync {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>>;
}

/// The chain, in priority order. The fallback rule must stay last.
static RULES: &[&(dyn ClassifyRule)] = &[
    &VariableRule,
    &DimensionRule,
    &MeasureRule,
    &MasterObjectRule,
    &WidgetRule,
    &SheetRule,
    &FallbackRule,
];

/// Classify a document root into descriptors.
///
/// Returns an empty list when `is_root` is false or the node is not a
/// mapping; otherwise the first matching rule decides, and the fallback
/// guarantees at least one descriptor.
pub fn classify(doc: &DocNode, ctx: &ClassifyContext, is_root: bool) -> Vec<Descriptor> {
    if !is_root || !doc.is_mapping() {
        return Vec::new();
    }
    for rule in RULES {
        if let Some(descriptors) = rule.apply(doc, ctx) {
            return descriptors;
        }
    }
    Vec::new()
}

/// The `qInfo` block: either top-level or nested under `Properties`.
fn qinfo(doc: &DocNode) -> Option<&DocNode> {
    if let Some(info) = doc.get("qInfo").filter(|n| n.is_mapping()) {
        return Some(info);
    }
    doc.get("Properties")
        .and_then(|p| p.get("qInfo"))
        .filter(|n| n.is_mapping())
}

/// The type tag under `qInfo.qType`, or `""` when absent.
fn type_tag(doc: &DocNode) -> &str {
    qinfo(doc).and_then(|qi| qi.get_str("qType")).unwrap_or("")
}

/// The id under `qInfo.qId`.
fn qinfo_id(doc: &DocNode) -> Option<String> {
    qinfo(doc)
        .and_then(|qi| qi.get_str("qId"))
        .map(str::to_string)
}

/// The `Properties` block, when it is a mapping.
fn properties(doc: &DocNode) -> Option<&DocNode> {
    doc.get("Properties").filter(|n| n.is_mapping())
}

/// Field names of the `Properties` block (empty when absent).
fn property_keys(doc: &DocNode) -> Vec<String> {
    properties(doc).map(DocNode::field_names).unwrap_or_default()
}

/// Whether the document exposes a variable definition: `Properties.qDefinition`
/// or a top-level `Definition` key.
fn has_definition(doc: &DocNode) -> bool {
    properties(doc).is_some_and(|p| p.get("qDefinition").is_some())
        || doc.get("Definition").is_some()
}

/// Shared predicate of the measure and masterobject rules: a recognized type
/// tag plus a `qHyperCubeDef.qMeasures` list (possibly empty).
fn measures_list(doc: &DocNode) -> Option<&[DocNode]> {
    if !matches!(type_tag(doc), "measure" | "mastermeasure" | "masterobject") {
        return None;
    }
    doc.get("qHyperCubeDef")?.get_sequence("qMeasures")
}

/// Rule 1: documents under a `Variables` directory carrying a definition.
struct VariableRule;

impl ClassifyRule for VariableRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.parent_is("variables") {
            return None;
        }
        let tagged = type_tag(doc) == "variable" && has_definition(doc);
        let named = doc.get_str("Name").is_some() && has_definition(doc);
        if !tagged && !named {
            return None;
        }

        let mut desc = Descriptor::new(EntityKind::Variable.as_str(), ctx.origin(), doc);
        desc.id = Some(
            doc.get_str("Name")
                .unwrap_or(UNNAMED_VARIABLE)
                .to_string(),
        );
        let expr = doc
            .get_str("Definition")
            .or_else(|| properties(doc).and_then(|p| p.get_str("qDefinition")))
            .unwrap_or("");
        desc.expression = Some(expr.to_string());
        Some(vec![desc])
    }
}

/// Rule 2: `dimension` documents with a `qDim` definition block.
struct DimensionRule;

impl ClassifyRule for DimensionRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.stem_is("dimension") || type_tag(doc) != "dimension" {
            return None;
        }
        let qdim = properties(doc)?.get("qDim").filter(|n| n.is_mapping())?;

        let mut desc = Descriptor::new(EntityKind::Dimension.as_str(), ctx.origin(), doc);
        desc.id = qinfo_id(doc);
        desc.fields = qdim.field_names();
        Some(vec![desc])
    }
}

/// Rule 3: `measure` documents. A non-empty measures list explodes into one
/// MasterMeasure per entry; an empty list yields the container as a
/// MasterObject.
struct MeasureRule;

impl ClassifyRule for MeasureRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.stem_is("measure") {
            return None;
        }
        let measures = measures_list(doc)?;
        if measures.is_empty() {
            return Some(vec![master_object_descriptor(doc, ctx)]);
        }

        let descriptors = measures
            .iter()
            .filter(|entry| entry.is_mapping())
            .map(|entry| {
                let mut desc =
                    Descriptor::new(EntityKind::MasterMeasure.as_str(), ctx.origin(), doc);
                desc.id = entry
                    .get("qInfo")
                    .and_then(|qi| qi.get_str("qId"))
                    .or_else(|| entry.get_str("qLibraryId"))
                    .or_else(|| entry.get("qMetaDef").and_then(|m| m.get_str("title")))
                    .map(str::to_string);
                desc.expression = Some(entry.get_str("qDef").unwrap_or("").to_string());
                desc
            })
            .collect();
        Some(descriptors)
    }
}

/// Rule 4: `masterobject` documents. Same predicate as rule 3 but always a
/// single container descriptor, regardless of list contents.
struct MasterObjectRule;

impl ClassifyRule for MasterObjectRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.stem_is("masterobject") {
            return None;
        }
        measures_list(doc)?;
        Some(vec![master_object_descriptor(doc, ctx)])
    }
}

fn master_object_descriptor(doc: &DocNode, ctx: &ClassifyContext) -> Descriptor {
    let mut desc = Descriptor::new(EntityKind::MasterObject.as_str(), ctx.origin(), doc);
    desc.id = qinfo_id(doc);
    desc.fields = property_keys(doc);
    desc
}

/// Rule 5: `widget` documents — chart instances.
struct WidgetRule;

impl ClassifyRule for WidgetRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.stem_is("widget") || !is_widget_instance(doc) {
            return None;
        }

        let mut desc = Descriptor::new(EntityKind::Widget.as_str(), ctx.origin(), doc);
        desc.id = Some(
            qinfo_id(doc)
                .or_else(|| doc.get_str("Id").map(str::to_string))
                .or_else(|| doc.get_str("Name").map(str::to_string))
                .unwrap_or_else(|| UNNAMED_WIDGET.to_string()),
        );
        desc.fields = property_keys(doc);
        desc.depends_on = widget_measure_refs(doc);
        Some(vec![desc])
    }
}

fn is_widget_instance(doc: &DocNode) -> bool {
    let tag = type_tag(doc);
    if matches!(tag, "visualization" | "object") || tag.starts_with(VENDOR_PREFIX) {
        return true;
    }
    properties(doc)
        .is_some_and(|p| p.get("visualization").is_some() || p.get("template").is_some())
}

/// Library-reference ids inside the widget's embedded measures list. These
/// are direct structural references and become dependency ids.
fn widget_measure_refs(doc: &DocNode) -> Vec<String> {
    let Some(measures) = properties(doc)
        .and_then(|p| p.get("qHyperCubeDef"))
        .and_then(|h| h.get_sequence("qMeasures"))
    else {
        return Vec::new();
    };
    measures
        .iter()
        .filter_map(|m| m.get_str("qLibraryId"))
        .map(str::to_string)
        .collect()
}

/// Rule 6: `sheet` documents. Contained widgets come from the pre-loaded
/// sibling `Widgets` directory and are recorded as metadata only — sheet
/// containment is not a reference and contributes no graph edges.
struct SheetRule;

impl ClassifyRule for SheetRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        if !ctx.stem_is("sheet") || type_tag(doc) != "sheet" {
            return None;
        }

        let sheet_props = doc.get("SheetProperties").filter(|n| n.is_mapping());
        let id = sheet_props
            .and_then(|sp| sp.get("Properties"))
            .and_then(|p| p.get("qInfo"))
            .and_then(|qi| qi.get_str("qId"))
            .or_else(|| sheet_props.and_then(|sp| sp.get_str("Id")))
            .unwrap_or(UNNAMED_SHEET);

        let mut desc = Descriptor::new(EntityKind::Sheet.as_str(), ctx.origin(), doc);
        desc.id = Some(id.to_string());
        desc.fields = vec!["sheetObjects".to_string()];
        desc.sheet_objects = ctx
            .sibling_widgets
            .iter()
            .map(|w| {
                qinfo_id(&w.doc)
                    .or_else(|| w.doc.get_str("Id").map(str::to_string))
                    .unwrap_or_else(|| w.dir_name.clone())
            })
            .collect();
        Some(vec![desc])
    }
}

/// Rule 7: universal fallback. Types the object after its parent directory.
struct FallbackRule;

impl ClassifyRule for FallbackRule {
    fn apply(&self, doc: &DocNode, ctx: &ClassifyContext) -> Option<Vec<Descriptor>> {
        let type_name = format!("Generic:{}", capitalize(&ctx.parent_dir));
        let mut desc = Descriptor::new(type_name, ctx.origin(), doc);
        desc.id = qinfo_id(doc)
            .or_else(|| doc.get_str("Id").map(str::to_string))
            .or_else(|| {
                if ctx.file_stem.is_empty() {
                    None
                } else {
                    Some(ctx.file_stem.clone())
                }
            });
        desc.fields = property_keys(doc);
        Some(vec![desc])
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
