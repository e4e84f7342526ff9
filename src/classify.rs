//! Index/document classification.
//!
//! Splits the flat content list into the designated index document and the
//! remaining documents. Pure partition — reading the index file's contents
//! is the orchestrator's job.

use crate::types::ContentFile;

/// Result of partitioning the content list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// The authored index document, if any file matched.
    pub index: Option<ContentFile>,
    /// Everything else, in input order.
    pub documents: Vec<ContentFile>,
}

/// Partition `files` into the index document and the rest.
///
/// A file is an index candidate when it sits at the content root and its
/// filename starts with `index_filename` — prefix matching keeps the check
/// extension-agnostic (`index` claims `index.md` and `index.generated.md`
/// alike). Nested files never match: a `guide/index.md` is an ordinary
/// document and a landing candidate for its directory, not the site index.
/// Every match is excluded from the document list; when several match, the
/// last one in input order supplies the index.
pub fn classify(files: Vec<ContentFile>, index_filename: &str) -> Classified {
    let mut index = None;
    let mut documents = Vec::with_capacity(files.len());

    for file in files {
        if file.relative_directory.is_empty() && file.filename().starts_with(index_filename) {
            index = Some(file);
        } else {
            documents.push(file);
        }
    }

    Classified { index, documents }
}
