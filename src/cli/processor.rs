use crate::{
    error::Result,
    ioutils::{create_dir, write_file},
    template::operation::TemplateOperation,
};
use std::path::Path;

/// Applies planned operations to the file system, in order
pub struct FileProcessor {
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Creates the project root itself.
    pub fn create_project_dir(&self, project_root: &Path) -> Result<()> {
        self.handle_file_operation(&TemplateOperation::CreateDirectory {
            target: project_root.to_path_buf(),
        })
    }

    /// Applies every operation; the first failure aborts the run and leaves
    /// already written files in place.
    pub fn process_all(&self, operations: &[TemplateOperation]) -> Result<()> {
        operations.iter().try_for_each(|operation| self.handle_file_operation(operation))
    }

    fn handle_file_operation(&self, operation: &TemplateOperation) -> Result<()> {
        log::info!("{}", operation.get_message(self.dry_run));
        if self.dry_run {
            return Ok(());
        }

        match operation {
            TemplateOperation::CreateDirectory { target } => create_dir(target),
            TemplateOperation::Write { target, content } => write_file(content, target),
        }
    }
}
