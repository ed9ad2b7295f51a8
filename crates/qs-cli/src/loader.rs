//! YAML loading with tab normalization.
//!
//! Qlik exports sometimes contain raw tab characters, which YAML forbids;
//! they are replaced with two spaces before parsing. A file that cannot be
//! read or parsed is skipped with a warning, never an error.

use qs_core::{DocNode, SiblingWidget};
use std::path::Path;

/// Load one YAML document as a [`DocNode`], or `None` when the file cannot
/// be read or parsed.
pub fn load_yaml_file(path: &Path) -> Option<DocNode> {
    let raw = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not open '{}': {e}", path.display());
            return None;
        }
    };

    let raw = if raw.contains('\t') {
        log::debug!("Replacing tabs with spaces in '{}'", path.display());
        raw.replace('\t', "  ")
    } else {
        raw
    };

    match serde_yaml::from_str::<serde_yaml::Value>(&raw) {
        Ok(value) => Some(DocNode::from(value)),
        Err(e) => {
            log::warn!("Could not parse YAML '{}': {e}", path.display());
            None
        }
    }
}

/// Load the widget documents from the `Widgets` directory next to
/// `sheet_path`, one per child folder containing a `widget.yaml`.
///
/// Returns an empty list when no such directory exists; the sheet rule then
/// records no contained objects.
pub fn load_sibling_widgets(sheet_path: &Path) -> Vec<SiblingWidget> {
    let Some(widgets_dir) = sheet_path.parent().map(|p| p.join("Widgets")) else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(&widgets_dir) else {
        return Vec::new();
    };

    let mut children: Vec<_> = entries.flatten().map(|e| e.path()).collect();
    children.sort();

    let mut widgets = Vec::new();
    for child in children {
        let widget_yaml = child.join("widget.yaml");
        if !widget_yaml.is_file() {
            continue;
        }
        let Some(dir_name) = child.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(doc) = load_yaml_file(&widget_yaml) {
            widgets.push(SiblingWidget {
                dir_name: dir_name.to_string(),
                doc,
            });
        }
    }
    widgets
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
