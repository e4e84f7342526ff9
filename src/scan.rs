//! Content directory scanning.
//!
//! Walks the content root and produces the flat [`ContentFile`] list the
//! rest of the pipeline consumes. Only markdown sources count as content;
//! hidden entries, `config.toml`, and build artifacts are skipped.
//!
//! ## Discovery Order
//!
//! The walk is depth-first with entries sorted by filename, so discovery
//! order is deterministic across platforms and runs. Downstream stages
//! (fallback index synthesis, landing tie-breaking) depend on this order
//! being stable — it is part of the scanner's contract, not an accident.

use crate::types::ContentFile;
use std::path::{Component, Path};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Scan the content root into a list of content files.
///
/// A missing or empty root yields an empty list, not an error — the build
/// treats "no documents" as a no-op.
pub fn scan(root: &Path) -> Result<Vec<ContentFile>, ScanError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    // depth 0 is the root itself, exempt so a dot-named root still scans
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !is_skipped(e.file_name().to_string_lossy().as_ref())
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_content(entry.path()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root");
        files.push(ContentFile::from_relative_path(&slash_join(relative)));
    }

    Ok(files)
}

/// Entries skipped entirely: hidden files/directories, site config, and
/// common build output directories.
fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || name == "config.toml" || name == "dist" || name == "node_modules"
}

fn is_content(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    CONTENT_EXTENSIONS.contains(&ext.as_str())
}

/// Join path components with forward slashes, independent of platform.
fn slash_join(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
