use crate::{
    cli::{processor::FileProcessor, Args},
    config::ProjectConfig,
    constants::DEFAULT_PACKAGE_MANAGER,
    error::Result,
    installer::{package_list, NpmInstaller, PackageInstaller},
    ioutils::get_project_dir,
    template::{get_template_engine, operation::TemplateOperation, processor::TemplateProcessor},
};
use std::path::{Path, PathBuf};

/// Main CLI runner that orchestrates the whole scaffolding pipeline
pub struct Runner {
    args: Args,
    installer: Box<dyn PackageInstaller>,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self::with_installer(args, Box::new(NpmInstaller::new()))
    }

    pub fn with_installer(args: Args, installer: Box<dyn PackageInstaller>) -> Self {
        Self { args, installer }
    }

    /// Executes the complete generation workflow and returns the project root.
    pub fn run(self) -> Result<PathBuf> {
        let config = ProjectConfig::from_args(&self.args)?;

        // Fails before anything is written
        let project_root = get_project_dir(&self.args.directory, &config.name)?;

        let operations = self.plan(&project_root, &config)?;

        let file_processor = FileProcessor::new(self.args.dry_run);
        file_processor.create_project_dir(&project_root)?;
        file_processor.process_all(&operations)?;

        let installed = self.install_packages(&project_root, &config)?;

        println!("{}", completion_message(&config, &project_root, installed, self.args.dry_run));
        Ok(project_root)
    }

    /// Renders every file of the project in memory
    fn plan(&self, project_root: &Path, config: &ProjectConfig) -> Result<Vec<TemplateOperation>> {
        let engine = get_template_engine();
        let processor = TemplateProcessor::new(&engine, project_root, config)?;
        let operations = processor.plan()?;
        log::debug!("Planned {} operations for {}", operations.len(), project_root.display());
        Ok(operations)
    }

    /// Returns whether packages were installed.
    fn install_packages(&self, project_root: &Path, config: &ProjectConfig) -> Result<bool> {
        let packages = package_list(config);
        if self.args.dry_run {
            log::info!("[DRY RUN] Installing packages: {}", packages.join(", "));
            return Ok(false);
        }
        if self.args.skip_install {
            log::info!("Skipping installation of: {}", packages.join(", "));
            return Ok(false);
        }

        log::info!("Installing packages: {}", packages.join(", "));
        self.installer.install(project_root, &packages)?;
        Ok(true)
    }
}

/// Final summary with the commands to run next.
pub fn completion_message(
    config: &ProjectConfig,
    project_root: &Path,
    installed: bool,
    dry_run: bool,
) -> String {
    if dry_run {
        return format!(
            "Dry run finished, nothing was written to {}.",
            project_root.display()
        );
    }

    let mut steps = vec![format!("cd {}", config.name)];
    if !installed {
        steps.push(format!(
            "{DEFAULT_PACKAGE_MANAGER} install {}",
            package_list(config).join(" ")
        ));
    }
    if config.with_firebase {
        steps.push("fill in .env with your Firebase project settings".to_string());
    }
    steps.push(format!("{DEFAULT_PACKAGE_MANAGER} run dev"));

    let mut message = format!(
        "Finished! 🎉 Project created in {}.\n\nNext steps:",
        project_root.display()
    );
    for step in steps {
        message.push_str("\n  ");
        message.push_str(&step);
    }
    message
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run().map(|_| ())
}
