//! The project description every pipeline step reads from.

use serde::Serialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// What to generate, built once from the command line and never mutated.
///
/// Field names double as template variables, so `with_firebase` is reachable
/// from condition expressions and template bodies alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    /// Directory name of the generated project
    pub name: String,
    /// Hosting on Netlify: adds an `export` script and `netlify.toml`
    pub for_netlify: bool,
    /// Firebase services: adds `.env`, `lib/firebase.js` and the SDK package
    pub with_firebase: bool,
    /// FontAwesome icons: registers the solid icon set in `_app.js`
    pub with_font_awesome: bool,
}

impl ProjectConfig {
    pub fn new<S: Into<String>>(
        name: S,
        for_netlify: bool,
        with_firebase: bool,
        with_font_awesome: bool,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, for_netlify, with_firebase, with_font_awesome })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            args.name.as_str(),
            args.for_netlify,
            args.with_firebase,
            args.with_font_awesome,
        )
    }
}

/// The name must map to exactly one new directory under the parent.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("project name must not be empty".into()));
    }
    if name == "." || name == ".." {
        return Err(Error::ValidationError(format!(
            "'{name}' is not a valid project name"
        )));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::ValidationError(format!(
            "project name '{name}' must not contain path separators"
        )));
    }
    Ok(())
}
