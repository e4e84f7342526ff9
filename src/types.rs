//! Shared types used across all pipeline stages.
//!
//! A [`ContentFile`] is produced once by the scan stage and read everywhere
//! else; a [`RedirectStub`] only exists for the duration of one build.

use serde::{Deserialize, Serialize};

/// One source document under the content root.
///
/// All path fields use forward slashes regardless of platform, and none of
/// them carries a leading or trailing separator. The filename is split at the
/// first dot, so `api.v2.md` has basename `api` and extension `v2.md` —
/// matching how output paths strip the full extension chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFile {
    /// Path from the content root, directory + filename (`guide/setup.md`).
    pub relative_path: String,
    /// Directory portion of `relative_path`. Empty for root-level files.
    pub relative_directory: String,
    /// Filename up to the first dot (`setup`).
    pub basename: String,
    /// Everything after the first dot (`md`). Empty when the filename has no dot.
    pub extension: String,
}

impl ContentFile {
    /// Build a `ContentFile` from a root-relative path string.
    ///
    /// Total over its input: `"intro"` (no extension), `"setup.md"` (root
    /// level), and `"a/b/c.tar.md"` (nested, multi-dot) are all valid.
    pub fn from_relative_path(relative_path: &str) -> Self {
        let (relative_directory, filename) = match relative_path.rsplit_once('/') {
            Some((dir, file)) => (dir.to_string(), file),
            None => (String::new(), relative_path),
        };
        let (basename, extension) = match filename.split_once('.') {
            Some((base, ext)) => (base.to_string(), ext.to_string()),
            None => (filename.to_string(), String::new()),
        };
        Self {
            relative_path: relative_path.to_string(),
            relative_directory,
            basename,
            extension,
        }
    }

    /// Filename portion of `relative_path`, extension included.
    pub fn filename(&self) -> &str {
        self.relative_path
            .rsplit_once('/')
            .map_or(self.relative_path.as_str(), |(_, file)| file)
    }
}

/// A generated, non-authored page whose sole function is pointing at a
/// resolved landing page's URL. Created transiently per build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectStub {
    /// Directory this stub stands in for (relative, empty for root).
    pub directory: String,
    /// URL of the resolved landing page the stub redirects to.
    pub target: String,
}
