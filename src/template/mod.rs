//! Scaffold planning for next-scaffold
//!
//! This module contains the scaffold processing components:
//! - `operation`: Defines operations to be performed on the project directory
//! - `processor`: Turns the scaffold table into an ordered list of operations

pub mod operation;
pub mod processor;

use crate::renderer::MiniJinjaRenderer;

/// Where the content of a scaffold entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Directory,
    /// `package.json`, built from [`crate::manifest::Manifest`]
    Manifest,
    /// MiniJinja template rendered against the project context
    Template(&'static str),
}

/// One file or directory of the generated project.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldEntry {
    /// Path relative to the project root
    pub target: &'static str,
    pub source: EntrySource,
    /// Condition expression over the project context; empty means always
    pub when: &'static str,
}

const fn always(target: &'static str, source: EntrySource) -> ScaffoldEntry {
    ScaffoldEntry { target, source, when: "" }
}

const fn only_if(
    target: &'static str,
    source: EntrySource,
    when: &'static str,
) -> ScaffoldEntry {
    ScaffoldEntry { target, source, when }
}

/// Every entry of a generated project, in the order they are written.
pub const SCAFFOLD: &[ScaffoldEntry] = &[
    always("package.json", EntrySource::Manifest),
    only_if(
        ".env",
        EntrySource::Template(include_str!("../../templates/.env.j2")),
        "with_firebase",
    ),
    only_if(
        "netlify.toml",
        EntrySource::Template(include_str!("../../templates/netlify.toml.j2")),
        "for_netlify",
    ),
    always("styles", EntrySource::Directory),
    always(
        "styles/global.scss",
        EntrySource::Template(include_str!("../../templates/styles/global.scss.j2")),
    ),
    always("pages", EntrySource::Directory),
    always(
        "pages/_app.js",
        EntrySource::Template(include_str!("../../templates/pages/_app.js.j2")),
    ),
    always(
        "pages/index.js",
        EntrySource::Template(include_str!("../../templates/pages/index.js.j2")),
    ),
    always("lib", EntrySource::Directory),
    always(
        "lib/api.js",
        EntrySource::Template(include_str!("../../templates/lib/api.js.j2")),
    ),
    only_if(
        "lib/firebase.js",
        EntrySource::Template(include_str!("../../templates/lib/firebase.js.j2")),
        "with_firebase",
    ),
];

pub fn get_template_engine() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new()
}
