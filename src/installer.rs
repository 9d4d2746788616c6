//! Dependency installation through an external package manager.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::ProjectConfig;
use crate::constants::{
    CORE_PACKAGES, DEFAULT_PACKAGE_MANAGER, FIREBASE_PACKAGE, FONT_AWESOME_PACKAGES,
};
use crate::error::{Error, Result};

/// Packages for a project: the core set, then Firebase, then FontAwesome.
pub fn package_list(config: &ProjectConfig) -> Vec<&'static str> {
    let mut packages = CORE_PACKAGES.to_vec();
    if config.with_firebase {
        packages.push(FIREBASE_PACKAGE);
    }
    if config.with_font_awesome {
        packages.extend_from_slice(FONT_AWESOME_PACKAGES);
    }
    packages
}

/// Installs packages into a freshly generated project.
pub trait PackageInstaller {
    /// Blocks until the installation has finished.
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<()>;
}

/// Runs `<program> install <packages...>` inside the project directory.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PACKAGE_MANAGER)
    }

    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<()> {
        let command = format!("{} install {}", self.program, packages.join(" "));
        log::debug!("Running '{command}' in {}", project_dir.display());

        let status = Command::new(&self.program)
            .arg("install")
            .args(packages)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::InstallerSpawnError {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::InstallError { command, status });
        }
        Ok(())
    }
}
