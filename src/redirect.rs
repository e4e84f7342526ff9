//! Landing-page emission planning.
//!
//! A document's own output never sits at its directory's root (`guide/index.md`
//! compiles to `docs/guide/index/index.html`), so every directory needs a
//! separate decision about what its root URL serves. The planner turns the
//! landing map into one decision per directory:
//!
//! - a resolved landing with redirects enabled → a [`RedirectStub`] pointing
//!   at the landing document's own URL
//! - a resolved landing with redirects disabled → the landing document is
//!   emitted a second time at the directory root (duplicate emission, not a
//!   pointer)
//! - no resolved landing → the directory's compiled index (authored or the
//!   global fallback) is emitted at the directory root; with no user document
//!   to point at, a stub would have no target, so the index is emitted
//!   directly regardless of the redirect setting

use crate::landing::LandingMap;
use crate::sitepath::{DirectoryRootStrategy, DocumentPathStrategy, OutputPathStrategy};
use crate::types::{ContentFile, RedirectStub};
use std::collections::BTreeSet;

/// What a directory's root URL serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingPage {
    /// A generated stub page redirecting to the landing document's URL.
    Redirect(RedirectStub),
    /// The landing document's content, rendered a second time at the
    /// directory root. `source` is the document's relative path.
    Duplicate { source: String },
    /// The directory's compiled index content.
    DirectoryIndex,
}

/// One planned emission at a directory's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLanding {
    /// Relative directory (empty for the content root).
    pub directory: String,
    /// Site-relative output path, `{base}/{directory}/index.html`.
    pub output_path: String,
    pub page: LandingPage,
}

/// Plan one emission per directory that holds at least one direct document.
///
/// The plan is sorted by directory, so emission order is deterministic.
pub fn plan_landings(
    documents: &[ContentFile],
    landings: &LandingMap,
    base_url: &str,
    emit_redirects: bool,
) -> Vec<PlannedLanding> {
    let document_paths = DocumentPathStrategy::new(base_url);
    let directories: BTreeSet<&str> = documents
        .iter()
        .map(|doc| doc.relative_directory.as_str())
        .collect();

    directories
        .into_iter()
        .map(|directory| {
            let root = DirectoryRootStrategy::new(base_url, directory);
            let page = match landings.get(directory) {
                Some(target) if emit_redirects => {
                    let doc = ContentFile::from_relative_path(target);
                    LandingPage::Redirect(RedirectStub {
                        directory: directory.to_string(),
                        target: document_paths.url(&doc),
                    })
                }
                Some(target) => LandingPage::Duplicate {
                    source: target.to_string(),
                },
                None => LandingPage::DirectoryIndex,
            };
            PlannedLanding {
                directory: directory.to_string(),
                // resolve ignores its document for directory roots; any doc works
                output_path: root.resolve(&ContentFile::from_relative_path("")),
                page,
            }
        })
        .collect()
}
