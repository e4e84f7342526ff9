//! # Simple Docs
//!
//! A minimal documentation site generator. Your filesystem is the data
//! source: markdown files become pages, directories become sections, and
//! every directory gets exactly one landing page — resolved predictably, no
//! matter how deep or unevenly populated the tree is.
//!
//! # Architecture: Resolve, Then Emit
//!
//! The build runs as a fixed sequence of phases over one immutable document
//! set:
//!
//! ```text
//! 1. Scan       content/  →  Vec<ContentFile>     (filesystem → flat list)
//! 2. Classify   split the site index from the documents
//! 3. Resolve    landing map + output path per document (pure)
//! 4. Emit       render each document and one landing page per directory
//! ```
//!
//! The resolution stages are pure functions over the scanned list, so unit
//! tests exercise the tree semantics without touching the filesystem or
//! rendering a single page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content directory into the flat `ContentFile` list |
//! | [`classify`] | Splits the site index document from the content documents |
//! | [`index`] | Synthesizes the fallback index when none is authored |
//! | [`landing`] | Two-pass landing-page resolution over the document tree |
//! | [`sitepath`] | Structured path math and output-path strategies |
//! | [`redirect`] | Per-directory landing emission plan (stub, copy, or index) |
//! | [`build`] | Orchestrates the phases and drives the render collaborators |
//! | [`render`] | Template engine, markdown conversion, output sinks, shells |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Shared types (`ContentFile`, `RedirectStub`) |
//! | [`output`] | CLI output formatting — what got built and where it went |
//!
//! # Design Decisions
//!
//! ## Directory-Style URLs Everywhere
//!
//! Every document compiles to `{base}/{dir}/{basename}/index.html`, so every
//! URL is a directory URL and never leaks the source extension. A separate
//! landing page is emitted at each directory's own root, either redirecting
//! to or duplicating the directory's resolved landing document.
//!
//! ## Two-Pass Landing Resolution
//!
//! A directory's own authored landing always beats one inherited from a
//! child directory. The resolver runs an explicit pass (same-directory
//! candidate matches, earlier candidate wins) strictly before the fallback
//! pass (inherit a nested directory's landing), because collapsing the two
//! changes winners — the ordering is a correctness requirement.
//!
//! ## Maud And Minijinja, Split By Audience
//!
//! The crate's own page shell is generated with [Maud](https://maud.lambda.xyz/)
//! — compile-time checked, XSS-safe by default. User-facing template
//! placeholders (`{{ docs_url }}`, `{{ docs_index }}` inside markdown
//! sources, the redirect stub, the optional `extends` shell) go through
//! minijinja, since user content is only known at run time.
//!
//! ## Rejected Collisions Over Silent Overwrites
//!
//! Two documents mapping to the same output path abort the build with both
//! source paths named, before anything is written. The only intentional
//! overwrite is landing emission, which runs after the document pass and
//! owns directory-root URLs.

pub mod build;
pub mod classify;
pub mod config;
pub mod index;
pub mod landing;
pub mod output;
pub mod redirect;
pub mod render;
pub mod scan;
pub mod sitepath;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
