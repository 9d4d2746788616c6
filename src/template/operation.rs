use std::path::PathBuf;

/// A single planned change to the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf },
    Write { target: PathBuf, content: String },
}

impl TemplateOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target } => target,
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("{}Writing to '{}'", prefix, target.display())
            }
        }
    }
}
