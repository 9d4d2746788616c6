#![allow(dead_code)]

use log::debug;
use next_scaffold::cli::{Args, Runner};
use next_scaffold::error::Result;
use next_scaffold::installer::PackageInstaller;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use walkdir::WalkDir;

/// Records every install call instead of spawning a package manager.
#[derive(Clone, Default)]
pub struct RecordingInstaller {
    pub calls: Rc<RefCell<Vec<(PathBuf, Vec<String>)>>>,
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, project_dir: &Path, packages: &[&str]) -> Result<()> {
        self.calls.borrow_mut().push((
            project_dir.to_path_buf(),
            packages.iter().map(|p| p.to_string()).collect(),
        ));
        Ok(())
    }
}

/// Arguments for a run that creates `name` inside `directory`.
pub fn args(directory: &Path, name: &str, flags: &[&str]) -> Args {
    use clap::Parser;
    let mut argv = vec!["next-scaffold", "-n", name];
    argv.extend_from_slice(flags);
    let mut args = Args::parse_from(next_scaffold::cli::normalize_legacy_flags(argv));
    args.directory = directory.to_path_buf();
    args.verbose = 2;
    args
}

/// Runs the pipeline with a recording installer.
pub fn run_recorded(args: Args) -> (Result<PathBuf>, RecordingInstaller) {
    let installer = RecordingInstaller::default();
    let result = Runner::with_installer(args, Box::new(installer.clone())).run();
    (result, installer)
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let mut files1 = std::collections::HashSet::new();
    let mut files2 = std::collections::HashSet::new();

    for entry in WalkDir::new(dir1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
    {
        files1.insert(entry.path().strip_prefix(dir1).unwrap().to_path_buf());
    }
    for entry in WalkDir::new(dir2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
    {
        files2.insert(entry.path().strip_prefix(dir2).unwrap().to_path_buf());
    }

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap();
        let expected = fs::read_to_string(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Generates a project named `demo` with the given flags, compares it to the
/// expected directory and returns the packages handed to the installer.
pub fn run_and_assert(flags: &[&str], expected_dir: &str) -> Vec<String> {
    let tmp_dir = tempfile::tempdir().unwrap();
    let (result, installer) = run_recorded(args(tmp_dir.path(), "demo", flags));
    let project_root = result.unwrap();
    assert_eq!(project_root, tmp_dir.path().join("demo"));

    match dir_diff::is_different(&project_root, expected_dir) {
        Ok(true) => {
            print_dir_diff(&project_root, expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Failed to compare directories");
        }
    }

    let calls = installer.calls.borrow();
    assert_eq!(calls.len(), 1, "installer should run exactly once");
    assert_eq!(calls[0].0, project_root);
    calls[0].1.clone()
}
