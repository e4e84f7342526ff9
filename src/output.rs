//! CLI output formatting for the scan and build stages.
//!
//! Output is information-centric: every entity leads with its positional
//! index and display title, with source paths as indented `Source:` context
//! lines and output paths after a `→` arrow.
//!
//! ## Scan
//!
//! ```text
//! Documents
//! 001 Setup
//!     Source: guide/setup.md
//! 002 Intro
//!     Source: intro.md
//!
//! Index
//!     index.md
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Setup → docs/guide/setup/index.html
//! 002 Intro → docs/intro/index.html
//!
//! Landings
//! docs/guide/index.html (redirect → docs/guide/index)
//! docs/index.html (index)
//!
//! Generated 2 documents, 2 landing pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::build::BuildOutcome;
use crate::classify::Classified;
use crate::index::title_from_slug;
use crate::redirect::LandingPage;
use crate::types::ContentFile;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn document_line(pos: usize, doc: &ContentFile) -> String {
    format!("{} {}", format_index(pos), title_from_slug(&doc.basename))
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output showing the classified document set.
pub fn format_scan_output(classified: &Classified) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Documents".to_string());
    for (i, doc) in classified.documents.iter().enumerate() {
        lines.push(document_line(i + 1, doc));
        lines.push(format!("    Source: {}", doc.relative_path));
    }
    if classified.documents.is_empty() {
        lines.push("    (none)".to_string());
    }

    lines.push(String::new());
    lines.push("Index".to_string());
    match &classified.index {
        Some(index) => lines.push(format!("    {}", index.relative_path)),
        None => lines.push("    (synthesized)".to_string()),
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(classified: &Classified) {
    for line in format_scan_output(classified) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output: one line per emitted document, then the landing
/// pages, then a summary.
pub fn format_build_output(outcome: &BuildOutcome) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, doc) in outcome.documents.iter().enumerate() {
        let file = ContentFile::from_relative_path(&doc.relative_path);
        lines.push(format!(
            "{} \u{2192} {}",
            document_line(i + 1, &file),
            doc.output_path
        ));
    }

    if !outcome.landings.is_empty() {
        lines.push(String::new());
        lines.push("Landings".to_string());
        for planned in &outcome.landings {
            let detail = match &planned.page {
                LandingPage::Redirect(stub) => format!("redirect \u{2192} {}", stub.target),
                LandingPage::Duplicate { source } => format!("copy of {}", source),
                LandingPage::DirectoryIndex => "index".to_string(),
            };
            lines.push(format!("{} ({})", planned.output_path, detail));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} documents, {} landing pages",
        outcome.documents.len(),
        outcome.landings.len()
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(outcome: &BuildOutcome) {
    for line in format_build_output(outcome) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildState, EmittedDocument};
    use crate::redirect::PlannedLanding;
    use crate::types::RedirectStub;

    fn classified(docs: &[&str], index: Option<&str>) -> Classified {
        Classified {
            index: index.map(ContentFile::from_relative_path),
            documents: docs
                .iter()
                .map(|p| ContentFile::from_relative_path(p))
                .collect(),
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn scan_output_lists_documents_with_sources() {
        let lines = format_scan_output(&classified(
            &["guide/setup.md", "intro.md"],
            Some("index.md"),
        ));
        assert_eq!(lines[0], "Documents");
        assert_eq!(lines[1], "001 Setup");
        assert_eq!(lines[2], "    Source: guide/setup.md");
        assert_eq!(lines[3], "002 Intro");
        assert!(lines.contains(&"    index.md".to_string()));
    }

    #[test]
    fn scan_output_marks_synthesized_index() {
        let lines = format_scan_output(&classified(&["intro.md"], None));
        assert!(lines.contains(&"    (synthesized)".to_string()));
    }

    #[test]
    fn build_output_shows_arrows_and_summary() {
        let outcome = BuildOutcome {
            documents: vec![EmittedDocument {
                relative_path: "guide/setup.md".to_string(),
                output_path: "docs/guide/setup/index.html".to_string(),
            }],
            landings: vec![PlannedLanding {
                directory: "guide".to_string(),
                output_path: "docs/guide/index.html".to_string(),
                page: LandingPage::Redirect(RedirectStub {
                    directory: "guide".to_string(),
                    target: "docs/guide/index".to_string(),
                }),
            }],
            index_authored: false,
            state: BuildState::Done,
        };
        let lines = format_build_output(&outcome);
        assert_eq!(lines[0], "001 Setup \u{2192} docs/guide/setup/index.html");
        assert!(
            lines.contains(&"docs/guide/index.html (redirect \u{2192} docs/guide/index)".to_string())
        );
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 documents, 1 landing pages"
        );
    }
}
