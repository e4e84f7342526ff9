//! Fallback index synthesis.
//!
//! When no authored index exists, the site still needs a table of contents.
//! This stage produces a minimal markdown document with one link per content
//! document, in discovery order — no sorting is imposed, which is a
//! documented property the tests pin down, not an omission.

use crate::sitepath::DocumentPathStrategy;
use crate::types::ContentFile;

/// Synthesize a markdown index: one `- [Title](URL)` line per document.
///
/// `Title` is the last segment of the document's output URL with dashes
/// turned into spaces and the first letter uppercased; `URL` is the output
/// URL itself (output path without the `index.html` leaf).
pub fn synthesize_index(documents: &[ContentFile], paths: &DocumentPathStrategy) -> String {
    let mut index = String::new();
    for doc in documents {
        let url = paths.url(doc);
        let slug = url.rsplit('/').next().unwrap_or(&url);
        index.push_str(&format!("- [{}]({})\n", title_from_slug(slug), url));
    }
    index
}

/// `getting-started` → `Getting started`.
pub(crate) fn title_from_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
