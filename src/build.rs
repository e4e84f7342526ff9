//! Build orchestration.
//!
//! Sequences the pipeline over one immutable document set:
//!
//! ```text
//! Classifying         split index from documents
//! IndexReady          authored or synthesized index, compiled per directory
//! DocumentsEmitting   every document rendered at its own output path
//! LandingsResolved    two-pass landing resolution over the full set
//! RedirectsEmitted    one landing page per directory root
//! Done
//! ```
//!
//! States advance strictly in order and `Done` is terminal; any collaborator
//! failure aborts the build with no retry. Per-document emission has no
//! cross-document data dependency, so it runs under rayon — the landing map,
//! candidate list, compiled index map, and configuration are all read-only
//! by then.
//!
//! Two distinct documents mapping to the same output path is a hard error,
//! detected against the full plan before any write (reject-and-report). The
//! only intentional overwrite is landing emission: a directory's landing
//! page is written after the document pass and owns the directory-root URL.

use crate::classify::classify;
use crate::config::{ConfigError, DocsConfig};
use crate::index::{synthesize_index, title_from_slug};
use crate::landing::{CandidateList, resolve_landings};
use crate::redirect::{LandingPage, PlannedLanding, plan_landings};
use crate::render::{
    OutputSink, RenderData, RenderError, TemplateEngine, compile, find_template, page_shell,
};
use crate::scan::ScanError;
use crate::sitepath::{DocumentPathStrategy, OutputPathStrategy};
use crate::types::ContentFile;
use rayon::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Unknown shell template: {0}")]
    UnknownTemplate(String),
    #[error("Output path collision: {path} produced by both {first} and {second}")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },
}

/// Pipeline phases, in order. Terminal on `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildState {
    Classifying,
    IndexReady,
    DocumentsEmitting,
    LandingsResolved,
    RedirectsEmitted,
    Done,
}

/// One document emitted at its own output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDocument {
    pub relative_path: String,
    pub output_path: String,
}

/// What a finished build produced, for reporting.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Documents emitted, in input order.
    pub documents: Vec<EmittedDocument>,
    /// Landing-page plan, one entry per directory, sorted.
    pub landings: Vec<PlannedLanding>,
    /// Whether the site index was authored or synthesized.
    pub index_authored: bool,
    pub state: BuildState,
}

/// Run the whole pipeline over an already-scanned file list.
///
/// `root` is the content root, used to read document contents and probe for
/// per-directory authored index files. An empty document set is a no-op
/// build producing no output.
pub fn build(
    root: &Path,
    files: Vec<ContentFile>,
    config: &DocsConfig,
    engine: &dyn TemplateEngine,
    sink: &dyn OutputSink,
) -> Result<BuildOutcome, BuildError> {
    let mut state = BuildState::Classifying;
    let classified = classify(files, &config.index_filename);
    let documents = classified.documents;

    if documents.is_empty() {
        return Ok(BuildOutcome {
            documents: Vec::new(),
            landings: Vec::new(),
            index_authored: classified.index.is_some(),
            state: BuildState::Done,
        });
    }

    let paths = DocumentPathStrategy::new(&config.base_url);

    // Site-wide index: authored contents, or the synthesized link list.
    let index_authored = classified.index.is_some();
    let index_source = match &classified.index {
        Some(index) => fs::read_to_string(root.join(&index.relative_path))?,
        None => synthesize_index(&documents, &paths),
    };
    advance(&mut state, BuildState::IndexReady);

    let shared = shared_data(config);
    let fallback_index = compile(engine, &index_source, &shared)?;
    let index_by_dir = compile_directory_indexes(
        root,
        &documents,
        config,
        engine,
        &shared,
        &fallback_index,
    )?;

    // Reject colliding output paths before anything is written.
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for doc in &documents {
        let output = paths.resolve(doc);
        if let Some(first) = seen.insert(output.clone(), &doc.relative_path) {
            return Err(BuildError::OutputCollision {
                path: output,
                first: first.to_string(),
                second: doc.relative_path.clone(),
            });
        }
    }

    let emitted: Vec<EmittedDocument> = documents
        .par_iter()
        .map(|doc| {
            let output_path = paths.resolve(doc);
            let html = render_document(root, doc, config, engine, &shared, &index_by_dir)?;
            sink.write(&output_path, &html)?;
            Ok(EmittedDocument {
                relative_path: doc.relative_path.clone(),
                output_path,
            })
        })
        .collect::<Result<_, BuildError>>()?;
    advance(&mut state, BuildState::DocumentsEmitting);

    let candidates = CandidateList::resolve(config.landing_candidates(), &documents);
    let landings = resolve_landings(&documents, &candidates);
    advance(&mut state, BuildState::LandingsResolved);

    let plan = plan_landings(&documents, &landings, &config.base_url, config.redirect);
    emit_landings(root, &plan, config, engine, sink, &shared, &index_by_dir)?;
    advance(&mut state, BuildState::RedirectsEmitted);

    advance(&mut state, BuildState::Done);
    Ok(BuildOutcome {
        documents: emitted,
        landings: plan,
        index_authored,
        state,
    })
}

fn advance(state: &mut BuildState, next: BuildState) {
    debug_assert!(next > *state, "build states only move forward");
    *state = next;
}

/// Data every template render sees.
fn shared_data(config: &DocsConfig) -> RenderData {
    let mut data = RenderData::new();
    data.insert("docs_url".to_string(), json!(config.docs_url()));
    data
}

/// Compile the index applicable to each directory: the directory's own
/// authored index file when present on disk, else the global fallback.
fn compile_directory_indexes(
    root: &Path,
    documents: &[ContentFile],
    config: &DocsConfig,
    engine: &dyn TemplateEngine,
    shared: &RenderData,
    fallback: &str,
) -> Result<BTreeMap<String, String>, BuildError> {
    let mut by_dir = BTreeMap::new();
    for doc in documents {
        let dir = doc.relative_directory.clone();
        if by_dir.contains_key(&dir) {
            continue;
        }
        let authored = root
            .join(&dir)
            .join(format!("{}.md", config.index_filename));
        let compiled = if authored.is_file() {
            compile(engine, &fs::read_to_string(&authored)?, shared)?
        } else {
            fallback.to_string()
        };
        by_dir.insert(dir, compiled);
    }
    Ok(by_dir)
}

/// Render one document: template pass, markdown pass, shell wrap.
fn render_document(
    root: &Path,
    doc: &ContentFile,
    config: &DocsConfig,
    engine: &dyn TemplateEngine,
    shared: &RenderData,
    index_by_dir: &BTreeMap<String, String>,
) -> Result<String, BuildError> {
    let source = fs::read_to_string(root.join(&doc.relative_path))?;
    let docs_index = index_by_dir
        .get(&doc.relative_directory)
        .map(String::as_str)
        .unwrap_or("");

    let mut data = shared.clone();
    data.insert("docs_index".to_string(), json!(docs_index));
    let body = compile(engine, &source, &data)?;

    let title = title_from_slug(&doc.basename);
    wrap_in_shell(&title, docs_index, &body, config, engine)
}

/// Wrap a compiled body in the configured shell: a named built-in template
/// when `extends` is set, the plain maud shell otherwise.
fn wrap_in_shell(
    title: &str,
    docs_index: &str,
    body: &str,
    config: &DocsConfig,
    engine: &dyn TemplateEngine,
) -> Result<String, BuildError> {
    match &config.template.extends {
        Some(name) => {
            let shell = find_template(name)
                .ok_or_else(|| BuildError::UnknownTemplate(name.clone()))?;
            let mut data = RenderData::new();
            data.insert("title".to_string(), json!(title));
            data.insert("docs_index".to_string(), json!(docs_index));
            data.insert(config.template.yields.clone(), json!(body));
            Ok(engine.render(shell, &data)?)
        }
        None => Ok(page_shell(title, docs_index, body).into_string()),
    }
}

/// Emit one landing page per directory root, after the document pass.
fn emit_landings(
    root: &Path,
    plan: &[PlannedLanding],
    config: &DocsConfig,
    engine: &dyn TemplateEngine,
    sink: &dyn OutputSink,
    shared: &RenderData,
    index_by_dir: &BTreeMap<String, String>,
) -> Result<(), BuildError> {
    for planned in plan {
        let docs_index = index_by_dir
            .get(&planned.directory)
            .map(String::as_str)
            .unwrap_or("");

        let html = match &planned.page {
            LandingPage::Redirect(stub) => {
                let template = find_template("redirector")
                    .expect("redirector template is embedded");
                let mut data = shared.clone();
                data.insert("target".to_string(), json!(stub.target));
                engine.render(template, &data)?
            }
            LandingPage::Duplicate { source } => {
                let doc = ContentFile::from_relative_path(source);
                render_document(root, &doc, config, engine, shared, index_by_dir)?
            }
            LandingPage::DirectoryIndex => {
                let title = directory_title(&planned.directory);
                wrap_in_shell(&title, "", docs_index, config, engine)?
            }
        };
        sink.write(&planned.output_path, &html)?;
    }
    Ok(())
}

/// Display title for a directory-root index page.
fn directory_title(directory: &str) -> String {
    match directory.rsplit('/').next() {
        Some("") | None => "Index".to_string(),
        Some(segment) => title_from_slug(segment),
    }
}
