//! Rendering collaborators.
//!
//! The resolution core never renders anything itself; it talks to the seams
//! defined here:
//!
//! - [`TemplateEngine`] compiles template placeholders (`{{ docs_url }}`,
//!   `{{ docs_index }}`) inside a document. The production implementation is
//!   [`JinjaEngine`]; failures are hard errors that abort the build.
//! - [`parse_markup`] converts markdown to HTML. Pure, side-effect-free.
//! - [`OutputSink`] persists one rendered document at a computed output
//!   path. [`FsSink`] writes to disk; [`MemorySink`] captures output for
//!   tests without touching the filesystem.
//! - [`find_template`] resolves named built-in templates embedded at compile
//!   time (the `redirector` stub, the `page` shell).
//!
//! The default document shell is generated with maud; the built-in named
//! templates are minijinja sources so the redirect stub and the `extends`
//! shell can interpolate runtime data.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Render data handed to the template engine: a flat string-keyed mapping.
pub type RenderData = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compiles a template-language document into text with the given data.
pub trait TemplateEngine: Sync {
    fn render(&self, content: &str, data: &RenderData) -> Result<String, RenderError>;
}

/// minijinja-backed [`TemplateEngine`].
///
/// Undefined variables render as empty rather than erroring, so plain
/// markdown documents with no placeholders pass through untouched.
pub struct JinjaEngine {
    env: minijinja::Environment<'static>,
}

impl JinjaEngine {
    pub fn new() -> Self {
        let mut env = minijinja::Environment::new();
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Lenient);
        // Jinja's default of eating the final newline would change markdown
        // sources that end mid-list; documents must pass through untouched.
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for JinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for JinjaEngine {
    fn render(&self, content: &str, data: &RenderData) -> Result<String, RenderError> {
        Ok(self.env.render_str(content, data)?)
    }
}

/// Convert markdown to HTML.
pub fn parse_markup(content: &str) -> String {
    let parser = Parser::new(content);
    let mut html = String::with_capacity(content.len() * 2);
    md_html::push_html(&mut html, parser);
    html
}

/// Compile a document the way the build pipeline does everywhere: template
/// placeholders first, then markdown to HTML.
pub fn compile(
    engine: &dyn TemplateEngine,
    content: &str,
    data: &RenderData,
) -> Result<String, RenderError> {
    Ok(parse_markup(&engine.render(content, data)?))
}

/// Persists one rendered document at a site-relative output path.
pub trait OutputSink: Sync {
    fn write(&self, path: &str, content: &str) -> io::Result<()>;
}

/// Filesystem sink rooted at the output directory. Creates parent
/// directories as needed; each output path is written independently.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl OutputSink for FsSink {
    fn write(&self, path: &str, content: &str) -> io::Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)
    }
}

/// In-memory sink for tests.
///
/// Uses Mutex (not RefCell) so it is Sync and works under rayon's par_iter.
#[derive(Default)]
pub struct MemorySink {
    pages: Mutex<std::collections::BTreeMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, sorted by path.
    pub fn pages(&self) -> std::collections::BTreeMap<String, String> {
        self.pages.lock().unwrap().clone()
    }
}

impl OutputSink for MemorySink {
    fn write(&self, path: &str, content: &str) -> io::Result<()> {
        self.pages
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}

const REDIRECTOR_TEMPLATE: &str = include_str!("../templates/redirector.html");
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Resolve a named built-in template to its embedded source.
pub fn find_template(name: &str) -> Option<&'static str> {
    match name {
        "redirector" => Some(REDIRECTOR_TEMPLATE),
        "page" => Some(PAGE_TEMPLATE),
        _ => None,
    }
}

/// Default document shell used when no `extends` template is configured.
///
/// `body` and `docs_index` are already-compiled HTML fragments.
pub fn page_shell(title: &str, docs_index: &str, body: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                @if !docs_index.is_empty() {
                    aside.docs-index {
                        (PreEscaped(docs_index))
                    }
                }
                main.docs-content {
                    (PreEscaped(body))
                }
            }
        }
    }
}
