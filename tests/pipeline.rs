//! End-to-end pipeline tests: scan a real content tree from disk, build into
//! a real output directory, and assert on the files that land there.

use simple_docs::build::build;
use simple_docs::config::DocsConfig;
use simple_docs::render::{FsSink, JinjaEngine};
use simple_docs::scan::scan;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_tree(root: &Path, tree: &[(&str, &str)]) {
    for (rel, body) in tree {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }
}

fn read(out: &Path, rel: &str) -> String {
    fs::read_to_string(out.join(rel))
        .unwrap_or_else(|_| panic!("expected output file {rel} to exist"))
}

fn build_site(tree: &[(&str, &str)], config: DocsConfig) -> (TempDir, TempDir) {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(content.path(), tree);

    let files = scan(content.path()).unwrap();
    let engine = JinjaEngine::new();
    let sink = FsSink::new(out.path().to_path_buf());
    build(content.path(), files, &config, &engine, &sink).unwrap();
    (content, out)
}

#[test]
fn full_site_lands_on_disk() {
    let config = DocsConfig {
        default_landings: "index".to_string(),
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(
        &[
            ("guide/index.md", "# Guide\n\nStart here."),
            ("guide/setup.md", "# Setup\n\nInstall things."),
            ("intro.md", "# Intro"),
        ],
        config,
    );

    // Every document at its directory-style path.
    assert!(read(out.path(), "docs/guide/index/index.html").contains("<h1>Guide</h1>"));
    assert!(read(out.path(), "docs/guide/setup/index.html").contains("<h1>Setup</h1>"));
    assert!(read(out.path(), "docs/intro/index.html").contains("<h1>Intro</h1>"));

    // guide/ has an explicit landing, so its root is a redirect stub.
    let stub = read(out.path(), "docs/guide/index.html");
    assert!(stub.contains("url=/docs/guide/index"));

    // The root has no `index` landing candidate: it serves the synthesized
    // index listing every document.
    let root = read(out.path(), "docs/index.html");
    assert!(root.contains("docs/guide/setup"));
    assert!(root.contains("docs/intro"));
    assert!(!root.contains("http-equiv"));
}

#[test]
fn placeholders_resolved_in_document_bodies() {
    let config = DocsConfig {
        default_landings: "intro".to_string(),
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(
        &[("intro.md", "# Intro\n\nDocs live under /{{ docs_url }}.")],
        config,
    );

    let page = read(out.path(), "docs/intro/index.html");
    assert!(page.contains("Docs live under /docs."));
}

#[test]
fn authored_index_feeds_every_page() {
    let config = DocsConfig {
        default_landings: "intro".to_string(),
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(
        &[
            ("index.md", "- [Handwritten](docs/intro)"),
            ("guide/setup.md", "# Setup"),
            ("intro.md", "# Intro"),
        ],
        config,
    );

    assert!(read(out.path(), "docs/intro/index.html").contains("Handwritten"));
    assert!(read(out.path(), "docs/guide/setup/index.html").contains("Handwritten"));
}

#[test]
fn redirects_disabled_duplicates_landing_at_directory_root() {
    let config = DocsConfig {
        default_landings: "index".to_string(),
        redirect: false,
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(
        &[("guide/index.md", "# Guide Landing"), ("guide/setup.md", "# Setup")],
        config,
    );

    let root = read(out.path(), "docs/guide/index.html");
    assert!(root.contains("<h1>Guide Landing</h1>"));
    assert!(!root.contains("http-equiv"));
}

#[test]
fn custom_base_url_prefixes_every_path() {
    let config = DocsConfig {
        base_url: "/handbook/v2".to_string(),
        default_landings: "intro".to_string(),
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(&[("intro.md", "# Intro")], config);

    assert!(out.path().join("handbook/v2/intro/index.html").is_file());
    let stub = read(out.path(), "handbook/v2/index.html");
    assert!(stub.contains("url=/handbook/v2/intro"));
}

#[test]
fn deep_tree_resolves_all_directory_roots() {
    let config = DocsConfig {
        default_landings: "index".to_string(),
        ..DocsConfig::default()
    };
    let (_content, out) = build_site(
        &[
            ("api/index/index.md", "# API Landing"),
            ("api/errors.md", "# Errors"),
            ("api/types/record.md", "# Record"),
        ],
        config,
    );

    // api/index/ has an explicit landing; api/ inherits it through the
    // nested-directory fallback; api/types/ has none and serves its index.
    assert!(read(out.path(), "docs/api/index/index.html").contains("url=/docs/api/index/index"));
    assert!(read(out.path(), "docs/api/index.html").contains("url=/docs/api/index/index"));
    let types_root = read(out.path(), "docs/api/types/index.html");
    assert!(types_root.contains("docs/api/types/record"));
    assert!(!types_root.contains("http-equiv"));
}

#[test]
fn rebuild_is_byte_identical() {
    let content = TempDir::new().unwrap();
    write_tree(
        content.path(),
        &[
            ("guide/index.md", "# Guide"),
            ("guide/setup.md", "# Setup"),
            ("intro.md", "# Intro"),
        ],
    );
    let config = DocsConfig {
        default_landings: "index".to_string(),
        ..DocsConfig::default()
    };
    let engine = JinjaEngine::new();

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let out = TempDir::new().unwrap();
        let files = scan(content.path()).unwrap();
        let sink = FsSink::new(out.path().to_path_buf());
        build(content.path(), files, &config, &engine, &sink).unwrap();

        let mut pages = Vec::new();
        collect_files(out.path(), out.path(), &mut pages);
        pages.sort();
        snapshots.push(pages);
    }
    assert_eq!(snapshots[0], snapshots[1]);
}

fn collect_files(root: &Path, dir: &Path, pages: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, pages);
        } else {
            let rel = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
            pages.push((rel, fs::read_to_string(&path).unwrap()));
        }
    }
}
