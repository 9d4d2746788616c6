use serde_json::json;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::constants::FIREBASE_KEYS;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;
use super::{EntrySource, ScaffoldEntry, SCAFFOLD};

/// Builds the template context: the project toggles plus the Firebase key table.
pub fn build_context(config: &ProjectConfig) -> Result<serde_json::Value> {
    let mut context = serde_json::to_value(config)?;
    context["firebase_keys"] = FIREBASE_KEYS
        .iter()
        .map(|(field, env)| json!({ "field": field, "env": env }))
        .collect();
    Ok(context)
}

pub struct TemplateProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    project_root: P,
    config: &'a ProjectConfig,
    context: serde_json::Value,
}

impl<'a, P: AsRef<Path>> TemplateProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        project_root: P,
        config: &'a ProjectConfig,
    ) -> Result<Self> {
        let context = build_context(config)?;
        Ok(Self { engine, project_root, config, context })
    }

    /// Processes a scaffold entry and determines the appropriate operation.
    ///
    /// # Returns
    /// * `Ok(None)` - The entry's condition is false for this project
    /// * `Ok(Some(operation))` - The operation to perform
    pub fn process(&self, entry: &ScaffoldEntry) -> Result<Option<TemplateOperation>> {
        if !self.engine.execute_expression(entry.when, &self.context)? {
            log::debug!("Skipping '{}' ({} is false)", entry.target, entry.when);
            return Ok(None);
        }

        let target = self.project_root.as_ref().join(entry.target);
        let operation = match entry.source {
            EntrySource::Directory => TemplateOperation::CreateDirectory { target },
            EntrySource::Manifest => {
                TemplateOperation::Write { target, content: Manifest::new(self.config).to_json()? }
            }
            EntrySource::Template(template) => {
                let content = self.engine.render(entry.target, template, &self.context)?;
                TemplateOperation::Write { target, content }
            }
        };
        Ok(Some(operation))
    }

    /// Renders the whole scaffold in memory, in write order.
    pub fn plan(&self) -> Result<Vec<TemplateOperation>> {
        let mut operations = Vec::with_capacity(SCAFFOLD.len());
        for entry in SCAFFOLD {
            if let Some(operation) = self.process(entry)? {
                operations.push(operation);
            }
        }
        Ok(operations)
    }
}
