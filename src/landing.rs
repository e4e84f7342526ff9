//! Landing-page resolution.
//!
//! For every directory in the document set, pick at most one document as the
//! directory's landing page. Resolution runs in two deterministic passes:
//!
//! 1. **Explicit pass** — a document whose basename matches a candidate name
//!    claims its own directory. Between two matches in one directory, the
//!    earlier candidate wins; ties at the same rank go to the first seen.
//! 2. **Fallback pass** — a directory with no explicit match probes each
//!    candidate in order for an already-resolved landing at
//!    `{directory}/{candidate}` — a nested directory's landing, not a
//!    same-level file. First hit wins.
//!
//! The passes must not be collapsed: a directory's own authored landing
//! always beats anything inherited from a child, and that ordering is a
//! correctness requirement, not an artifact.
//!
//! A directory that neither pass resolves stays unmapped and is handled by
//! the redirect planner with the compiled index instead. An empty document
//! set yields an empty map; not an error.

use crate::types::ContentFile;
use std::collections::BTreeMap;

/// Ordered basenames tried, in order, when resolving a landing page.
///
/// Configured once per build; when the configuration leaves it empty, the
/// basename of the first scanned document becomes the sole candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    names: Vec<String>,
}

impl CandidateList {
    /// Build from configured names, defaulting to the first document's
    /// basename when none are configured.
    pub fn resolve(configured: Vec<String>, documents: &[ContentFile]) -> Self {
        let names = if configured.is_empty() {
            documents
                .first()
                .map(|doc| vec![doc.basename.clone()])
                .unwrap_or_default()
        } else {
            configured
        };
        Self { names }
    }

    /// Position of `basename` in the candidate order, lower is stronger.
    pub fn rank(&self, basename: &str) -> Option<usize> {
        self.names.iter().position(|name| name == basename)
    }

    /// Candidate names in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Mapping from relative directory to its landing document's relative path.
///
/// Keys are directory paths (empty string for the content root). Iteration
/// is sorted by directory, so emission order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingMap {
    entries: BTreeMap<String, String>,
}

impl LandingMap {
    pub fn get(&self, directory: &str) -> Option<&str> {
        self.entries.get(directory).map(String::as_str)
    }

    pub fn contains(&self, directory: &str) -> bool {
        self.entries.contains_key(directory)
    }

    /// `(directory, landing relative path)` pairs, sorted by directory.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(dir, path)| (dir.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve landings for every directory containing at least one direct
/// document. See the module docs for the two-pass algorithm.
pub fn resolve_landings(documents: &[ContentFile], candidates: &CandidateList) -> LandingMap {
    // Directories with direct documents, in first-seen order.
    let mut directories: Vec<&str> = Vec::new();
    for doc in documents {
        if !directories.contains(&doc.relative_directory.as_str()) {
            directories.push(&doc.relative_directory);
        }
    }

    // Explicit pass. Track the winning candidate rank per directory so a
    // later, weaker match never displaces an earlier, stronger one.
    let mut entries: BTreeMap<String, String> = BTreeMap::new();
    let mut ranks: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        let Some(rank) = candidates.rank(&doc.basename) else {
            continue;
        };
        let dir = doc.relative_directory.as_str();
        let stronger = ranks.get(dir).is_none_or(|&held| rank < held);
        if stronger {
            ranks.insert(dir, rank);
            entries.insert(dir.to_string(), doc.relative_path.clone());
        }
    }

    // Fallback pass: inherit a nested directory's landing. Directories are
    // visited in first-seen order and the map grows as it goes, so a chain
    // of index-less parents can resolve through a child resolved earlier in
    // the same pass.
    for dir in directories {
        if entries.contains_key(dir) {
            continue;
        }
        for candidate in candidates.iter() {
            let nested = if dir.is_empty() {
                candidate.to_string()
            } else {
                format!("{dir}/{candidate}")
            };
            if let Some(target) = entries.get(&nested) {
                entries.insert(dir.to_string(), target.clone());
                break;
            }
        }
    }

    LandingMap { entries }
}
