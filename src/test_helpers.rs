//! Shared test utilities for the simple-docs test suite.
//!
//! Provides content-tree builders and lookup helpers over pipeline outputs.
//! Lookups panic with a message listing what was available, so a failing
//! test points straight at the mismatch.

use std::path::Path;

use crate::build::BuildOutcome;
use crate::redirect::PlannedLanding;

/// Write a content tree under `root`: each entry is `(relative path, body)`.
/// Parent directories are created as needed.
pub fn write_content(root: &Path, tree: &[(&str, &str)]) {
    for (rel, body) in tree {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }
}

/// Find the emitted output path for a source document. Panics if not found.
pub fn output_path_of<'a>(outcome: &'a BuildOutcome, relative_path: &str) -> &'a str {
    outcome
        .documents
        .iter()
        .find(|d| d.relative_path == relative_path)
        .map(|d| d.output_path.as_str())
        .unwrap_or_else(|| {
            let known: Vec<&str> = outcome
                .documents
                .iter()
                .map(|d| d.relative_path.as_str())
                .collect();
            panic!("document '{relative_path}' not emitted. Available: {known:?}")
        })
}

/// Find the landing plan entry for a directory. Panics if not found.
pub fn landing_of<'a>(outcome: &'a BuildOutcome, directory: &str) -> &'a PlannedLanding {
    outcome
        .landings
        .iter()
        .find(|l| l.directory == directory)
        .unwrap_or_else(|| {
            let known: Vec<&str> = outcome
                .landings
                .iter()
                .map(|l| l.directory.as_str())
                .collect();
            panic!("no landing planned for '{directory}'. Available: {known:?}")
        })
}
