//! Structured site-path math and output-path strategies.
//!
//! Every document becomes a directory-style URL: its output path always ends
//! in `index.html`, so `guide/setup.md` is served at `docs/guide/setup/`.
//! This module owns that derivation and the [`SitePath`] type behind it —
//! directory math happens on segments, never by trimming separator strings
//! at call sites.
//!
//! All operations here are total. Empty directories, extension-less
//! filenames, and root-level documents are ordinary inputs:
//!
//! - `guide/setup.md` + base `docs` → `docs/guide/setup/index.html`
//! - `intro.md` + empty base → `intro/index.html`
//! - `LICENSE` (no extension) + base `docs` → `docs/LICENSE/index.html`

use crate::types::ContentFile;
use std::fmt;

/// Leaf filename every output path ends with.
pub const INDEX_LEAF: &str = "index.html";

/// A normalized site path: forward slashes, no leading/trailing/duplicate
/// separators. The empty path is the site root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePath {
    segments: Vec<String>,
}

impl SitePath {
    /// Parse from any separator-style string. Empty segments (leading,
    /// trailing, or doubled slashes) are dropped, so `"/docs//guide/"`
    /// normalizes to `docs/guide`.
    pub fn new(path: &str) -> Self {
        let segments = path
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Append another path fragment, normalizing as in [`SitePath::new`].
    pub fn join(&self, fragment: &str) -> Self {
        let mut joined = self.clone();
        joined
            .segments
            .extend(SitePath::new(fragment).segments);
        joined
    }

    /// The containing directory, or the root path when already at the root.
    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    /// True for the site root (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render as a forward-slash string without leading slash. The root
    /// renders as the empty string.
    pub fn as_string(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Strategy for deriving a document's output path.
///
/// The default strategy places every document under its own directory-style
/// URL; the directory-root strategy is substituted when emitting landing
/// pages and redirect stubs at a directory's own root.
pub trait OutputPathStrategy {
    /// Compute the site-relative output path for one document.
    fn resolve(&self, doc: &ContentFile) -> String;
}

/// Default output mapping: `{base}/{directory}/{basename}/index.html`.
#[derive(Debug, Clone)]
pub struct DocumentPathStrategy {
    base_url: SitePath,
}

impl DocumentPathStrategy {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: SitePath::new(base_url),
        }
    }

    /// The URL a document is served at: its output path without the trailing
    /// `index.html` leaf.
    pub fn url(&self, doc: &ContentFile) -> String {
        self.base_url
            .join(&doc.relative_directory)
            .join(&doc.basename)
            .as_string()
    }
}

impl OutputPathStrategy for DocumentPathStrategy {
    fn resolve(&self, doc: &ContentFile) -> String {
        self.base_url
            .join(&doc.relative_directory)
            .join(&doc.basename)
            .join(INDEX_LEAF)
            .as_string()
    }
}

/// Override mapping used for landing-page emission: the output lands at the
/// directory's own root, `{base}/{directory}/index.html`, regardless of
/// which document is being rendered there.
#[derive(Debug, Clone)]
pub struct DirectoryRootStrategy {
    root: SitePath,
}

impl DirectoryRootStrategy {
    pub fn new(base_url: &str, directory: &str) -> Self {
        Self {
            root: SitePath::new(base_url).join(directory),
        }
    }

    /// The directory-root URL this strategy emits at.
    pub fn url(&self) -> String {
        self.root.as_string()
    }
}

impl OutputPathStrategy for DirectoryRootStrategy {
    fn resolve(&self, _doc: &ContentFile) -> String {
        self.root.join(INDEX_LEAF).as_string()
    }
}

/// Turn an output path back into its URL by dropping the `index.html` leaf.
pub fn output_url(output_path: &str) -> String {
    let path = SitePath::new(output_path);
    match path.segments.last() {
        Some(leaf) if leaf == INDEX_LEAF => path.parent().as_string(),
        _ => path.as_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str) -> ContentFile {
        ContentFile::from_relative_path(path)
    }

    // =========================================================================
    // SitePath tests
    // =========================================================================

    #[test]
    fn new_drops_leading_and_trailing_slashes() {
        assert_eq!(SitePath::new("/docs/").as_string(), "docs");
    }

    #[test]
    fn new_collapses_duplicate_separators() {
        assert_eq!(SitePath::new("docs//guide").as_string(), "docs/guide");
    }

    #[test]
    fn new_normalizes_backslashes() {
        assert_eq!(SitePath::new("docs\\guide").as_string(), "docs/guide");
    }

    #[test]
    fn empty_string_is_root() {
        assert!(SitePath::new("").is_root());
        assert_eq!(SitePath::new("").as_string(), "");
    }

    #[test]
    fn join_with_empty_fragment_is_identity() {
        let p = SitePath::new("docs");
        assert_eq!(p.join("").as_string(), "docs");
    }

    #[test]
    fn join_nested_fragment() {
        assert_eq!(
            SitePath::new("docs").join("guide/setup").as_string(),
            "docs/guide/setup"
        );
    }

    #[test]
    fn parent_of_root_is_root() {
        assert!(SitePath::new("").parent().is_root());
    }

    #[test]
    fn parent_drops_last_segment() {
        assert_eq!(SitePath::new("docs/guide").parent().as_string(), "docs");
    }

    // =========================================================================
    // DocumentPathStrategy tests
    // =========================================================================

    #[test]
    fn nested_document_output_path() {
        let s = DocumentPathStrategy::new("/docs");
        assert_eq!(
            s.resolve(&doc("guide/setup.md")),
            "docs/guide/setup/index.html"
        );
    }

    #[test]
    fn root_document_with_empty_base() {
        let s = DocumentPathStrategy::new("");
        assert_eq!(s.resolve(&doc("intro.md")), "intro/index.html");
    }

    #[test]
    fn output_path_never_contains_source_extension() {
        let s = DocumentPathStrategy::new("/docs");
        let path = s.resolve(&doc("guide/setup.md"));
        assert!(!path.contains(".md"));
        assert!(path.ends_with("/index.html"));
    }

    #[test]
    fn multi_dot_extension_fully_stripped() {
        let s = DocumentPathStrategy::new("docs");
        assert_eq!(
            s.resolve(&doc("archive/bundle.tar.md")),
            "docs/archive/bundle/index.html"
        );
    }

    #[test]
    fn extensionless_document_is_valid() {
        let s = DocumentPathStrategy::new("docs");
        assert_eq!(s.resolve(&doc("LICENSE")), "docs/LICENSE/index.html");
    }

    #[test]
    fn base_url_with_surrounding_slashes_is_trimmed() {
        let s = DocumentPathStrategy::new("/docs/");
        assert_eq!(s.resolve(&doc("intro.md")), "docs/intro/index.html");
    }

    #[test]
    fn document_url_drops_index_leaf() {
        let s = DocumentPathStrategy::new("/docs");
        assert_eq!(s.url(&doc("guide/setup.md")), "docs/guide/setup");
    }

    // =========================================================================
    // DirectoryRootStrategy tests
    // =========================================================================

    #[test]
    fn directory_root_ignores_the_document() {
        let s = DirectoryRootStrategy::new("/docs", "guide");
        assert_eq!(s.resolve(&doc("guide/index.md")), "docs/guide/index.html");
        assert_eq!(s.resolve(&doc("other/page.md")), "docs/guide/index.html");
    }

    #[test]
    fn root_directory_with_empty_base() {
        let s = DirectoryRootStrategy::new("", "");
        assert_eq!(s.resolve(&doc("intro.md")), "index.html");
        assert_eq!(s.url(), "");
    }

    // =========================================================================
    // output_url tests
    // =========================================================================

    #[test]
    fn url_strips_trailing_index_leaf() {
        assert_eq!(output_url("docs/guide/setup/index.html"), "docs/guide/setup");
    }

    #[test]
    fn url_of_bare_index_is_empty() {
        assert_eq!(output_url("index.html"), "");
    }
}
