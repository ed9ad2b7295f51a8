//! Document tree consumed by the classifier chain.
//!
//! A loaded YAML document is converted into [`DocNode`], a closed
//! three-variant sum type (mapping, sequence, scalar) so that every traversal
//! site is exhaustively handled. Key insertion order is irrelevant to
//! classification, so mappings are stored sorted for deterministic iteration.

use std::collections::BTreeMap;

/// A scalar leaf of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// A node of the document tree: mapping, sequence, or scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    Mapping(BTreeMap<String, DocNode>),
    Sequence(Vec<DocNode>),
    Scalar(Scalar),
}

impl DocNode {
    /// An empty mapping, useful as a neutral default when a block is absent.
    pub fn empty_mapping() -> Self {
        DocNode::Mapping(BTreeMap::new())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, DocNode::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, DocNode>> {
        match self {
            DocNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocNode]> {
        match self {
            DocNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocNode::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a key in a mapping node. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&DocNode> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Look up a key and require the value to be a mapping.
    pub fn get_mapping(&self, key: &str) -> Option<&BTreeMap<String, DocNode>> {
        self.get(key).and_then(DocNode::as_mapping)
    }

    /// Look up a key and require the value to be a sequence.
    pub fn get_sequence(&self, key: &str) -> Option<&[DocNode]> {
        self.get(key).and_then(DocNode::as_sequence)
    }

    /// Look up a key and require the value to be a non-empty string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(DocNode::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Field names observed on a mapping node (empty for non-mappings).
    pub fn field_names(&self) -> Vec<String> {
        self.as_mapping()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl From<serde_yaml::Value> for DocNode {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (key, val) in map {
                    let Some(key) = mapping_key(&key) else {
                        continue;
                    };
                    entries.insert(key, DocNode::from(val));
                }
                DocNode::Mapping(entries)
            }
            serde_yaml::Value::Sequence(items) => {
                DocNode::Sequence(items.into_iter().map(DocNode::from).collect())
            }
            serde_yaml::Value::String(s) => DocNode::Scalar(Scalar::Text(s)),
            serde_yaml::Value::Bool(b) => DocNode::Scalar(Scalar::Bool(b)),
            serde_yaml::Value::Number(n) => {
                DocNode::Scalar(Scalar::Number(n.as_f64().unwrap_or(0.0)))
            }
            serde_yaml::Value::Null => DocNode::Scalar(Scalar::Null),
            // YAML tags wrap an inner value; the tag itself carries no
            // classification signal.
            serde_yaml::Value::Tagged(tagged) => DocNode::from(tagged.value),
        }
    }
}

/// Render a YAML mapping key as a string. Non-scalar keys are dropped.
fn mapping_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
