//! `package.json` generation.

use cruet::case::kebab::to_kebab_case;
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ProjectConfig;
use crate::constants::MANIFEST_VERSION;
use crate::error::Result;

/// The subset of an npm manifest the scaffold writes. Dependencies are added
/// later by the package manager itself.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub name: String,
    pub version: &'static str,
    pub private: bool,
    pub scripts: IndexMap<&'static str, &'static str>,
}

impl Manifest {
    pub fn new(config: &ProjectConfig) -> Self {
        let mut scripts = IndexMap::new();
        scripts.insert("dev", "next dev");
        scripts.insert("build", "next build");
        scripts.insert("start", "next start");
        if config.for_netlify {
            scripts.insert("export", "next export");
        }

        Self {
            name: to_kebab_case(&config.name),
            version: MANIFEST_VERSION,
            private: true,
            scripts,
        }
    }

    /// Two-space indented JSON with keys in declaration order.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
