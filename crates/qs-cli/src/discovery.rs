//! App-folder discovery.
//!
//! Every directory containing an `App.yaml` (or `App.yml`) is one processing
//! unit. Discovery does not descend into a found app: nested app markers
//! belong to the outer app's export, not to a separate unit.

use std::io;
use std::path::{Path, PathBuf};

const APP_MARKERS: &[&str] = &["App.yaml", "App.yml"];

/// Walk `root` recursively and return every app folder, in path order.
pub fn discover_app_folders(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    if APP_MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
        found.push(dir.to_path_buf());
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, found)?;
        }
    }
    Ok(())
}

/// Collect every `.yaml`/`.yml` file under `app_dir`, in path order.
pub fn find_yaml_files(app_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_yaml(app_dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_yaml(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_yaml(&path, files)?;
        } else if has_yaml_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
