use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves `<parent>/<name>` and ensures nothing exists there yet.
pub fn get_project_dir<P: AsRef<Path>>(parent: P, name: &str) -> Result<PathBuf> {
    let project_dir = parent.as_ref().join(name);
    if project_dir.exists() {
        return Err(Error::ProjectDirectoryExistsError {
            project_dir: project_dir.display().to_string(),
        });
    }
    Ok(project_dir)
}

/// Creates exactly one directory; the parent must already exist.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}
